pub mod module_runtime;
