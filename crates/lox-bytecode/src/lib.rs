//! lox-bytecode - the value/object substrate and chunk format shared by the
//! compiler and the VM.
//!
//! This crate owns the hardest data structures in the pipeline: the tagged
//! `Value`, heap-allocated interned strings (`Object`/`ObjString`), the
//! open-addressing intern/hash `Table`, and the `Chunk` + `ValueArray` that
//! hold compiled bytecode. `Heap` ties object allocation and interning
//! together; it is owned by the VM and borrowed mutably by the compiler
//! during a single `interpret` call so that string constants land in the
//! same intern table string concatenation allocates into at runtime.

mod chunk;
mod heap;
mod object;
mod table;
mod value;
mod value_array;

pub use chunk::{Chunk, OpCode};
pub use heap::Heap;
pub use object::{fnv1a_hash, Object, ObjectKind, ObjString};
pub use table::Table;
pub use value::Value;
pub use value_array::ValueArray;
