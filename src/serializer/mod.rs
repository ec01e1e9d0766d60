pub mod codec;
pub mod deserializer;
pub mod hydrator;
pub mod json_keys;
pub mod rename;
pub mod serializer;
pub mod types;
