//! Object allocation and string interning.

use crate::object::{fnv1a_hash, Object, ObjectKind, ObjString};
use crate::table::Table;
use crate::value::Value;

/// Owns every heap object the compiler and VM allocate during one `Vm`'s
/// lifetime, plus the intern table that canonicalizes strings.
///
/// `strings` is a `Table` used purely as an intern *set*: each entry's
/// value is `Value::Nil`, a placeholder, since only the key (the canonical
/// pointer) and its content matter here. `Vm::globals` is a second,
/// unrelated `Table` instance of the same type that actually uses the
/// value slot to hold variable bindings.
pub struct Heap {
    objects: *mut Object,
    pub strings: Table,
}

impl Heap {
    pub fn new() -> Self {
        Self {
            objects: std::ptr::null_mut(),
            strings: Table::new(),
        }
    }

    /// Interns a copy of `s`. If an equal string is already canonical,
    /// returns the existing object and allocates nothing.
    pub fn copy_string(&mut self, s: &str) -> *mut Object {
        let hash = fnv1a_hash(s.as_bytes());
        if let Some(existing) = self.strings.find_string(s.as_bytes(), hash) {
            return existing;
        }
        self.allocate_string(s.as_bytes().to_vec().into_boxed_slice(), hash)
    }

    /// Takes ownership of an already-built buffer (concatenation results
    /// land here) rather than copying it again. If an equal string is
    /// already interned, the buffer is simply dropped and the canonical
    /// object returned.
    pub fn take_string(&mut self, bytes: Box<[u8]>) -> *mut Object {
        let hash = fnv1a_hash(&bytes);
        if let Some(existing) = self.strings.find_string(&bytes, hash) {
            return existing;
        }
        self.allocate_string(bytes, hash)
    }

    fn allocate_string(&mut self, bytes: Box<[u8]>, hash: u32) -> *mut Object {
        let obj_string = ObjString::new(bytes, hash);
        let ptr = self.register(ObjectKind::String(obj_string));
        self.strings.set(ptr, Value::Nil);
        ptr
    }

    fn register(&mut self, kind: ObjectKind) -> *mut Object {
        let boxed = Box::new(Object {
            kind,
            next: self.objects,
        });
        let ptr = Box::into_raw(boxed);
        self.objects = ptr;
        ptr
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Heap {
    fn drop(&mut self) {
        let mut obj = self.objects;
        while !obj.is_null() {
            // Safety: every node on this list was produced by `register`
            // via `Box::into_raw`, is visited exactly once, and nothing
            // outlives this walk that could dereference it afterward.
            unsafe {
                let next = (*obj).next;
                drop(Box::from_raw(obj));
                obj = next;
            }
        }
        self.objects = std::ptr::null_mut();
    }
}
