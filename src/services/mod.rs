pub mod file_service;
pub mod folder_service;
pub mod object_store;

#[cfg(test)]
pub mod memory_store;
