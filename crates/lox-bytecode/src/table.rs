//! Open-addressing hash table, keyed by interned-string object pointers.
//!
//! Used two ways by the rest of the pipeline: as the intern set that
//! canonicalizes every string (`Heap::strings`), and, as a second, separate
//! instance of the same type, as global-variable storage (`Vm::globals`).
//! Both uses share one probing and growth scheme.

use crate::object::Object;
use crate::value::Value;

struct Entry {
    key: Option<*mut Object>,
    value: Value,
}

/// Linear-probed, tombstone-aware hash table. Capacity grows from 0 to 8
/// and then doubles, rehashing in place, whenever `count + 1` would exceed
/// 75% load. `count` tracks live entries plus tombstones, matching the
/// reference load-factor accounting: a slot is only counted once, at the
/// moment it transitions from truly-empty to occupied-or-tombstoned, never
/// again when a tombstone is reused by a later insert.
pub struct Table {
    entries: Vec<Entry>,
    count: usize,
}

const MAX_LOAD: f64 = 0.75;

impl Table {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, key: *mut Object) -> Option<Value> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = self.find_entry_index(key);
        self.entries[idx].key.map(|_| self.entries[idx].value)
    }

    /// Inserts or overwrites `key`'s value. Returns `true` if `key` was not
    /// already present.
    pub fn set(&mut self, key: *mut Object, value: Value) -> bool {
        if self.count + 1 > (self.capacity() as f64 * MAX_LOAD) as usize {
            self.grow();
        }
        let idx = self.find_entry_index(key);
        let is_new_key = self.entries[idx].key.is_none();
        if is_new_key && self.entries[idx].value.is_nil() {
            // Truly-empty slot, not a reused tombstone: only this case
            // grows the load count.
            self.count += 1;
        }
        self.entries[idx].key = Some(key);
        self.entries[idx].value = value;
        is_new_key
    }

    /// Removes `key`, leaving a tombstone so later probes over it keep
    /// reaching entries that were inserted after it.
    pub fn delete(&mut self, key: *mut Object) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let idx = self.find_entry_index(key);
        if self.entries[idx].key.is_none() {
            return false;
        }
        self.entries[idx].key = None;
        self.entries[idx].value = Value::Bool(true);
        true
    }

    pub fn add_all(&mut self, from: &Table) {
        for entry in &from.entries {
            if let Some(key) = entry.key {
                self.set(key, entry.value);
            }
        }
    }

    /// Looks up a string by content rather than by pointer, the one
    /// operation that makes interning possible: before allocating a new
    /// `ObjString` for a lexeme, the heap asks "is an equal string already
    /// canonical?" via this scan.
    pub fn find_string(&self, bytes: &[u8], hash: u32) -> Option<*mut Object> {
        if self.entries.is_empty() {
            return None;
        }
        let capacity = self.capacity();
        let mut index = (hash as usize) % capacity;
        loop {
            match self.entries[index].key {
                None => {
                    if self.entries[index].value.is_nil() {
                        return None;
                    }
                    // tombstone: keep probing past it
                }
                Some(key) => {
                    // Safety: every live key pointer refers to an Object
                    // owned by the same Heap this table belongs to.
                    let candidate = unsafe { &*key };
                    if let crate::object::ObjectKind::String(s) = &candidate.kind {
                        if s.hash == hash && s.as_bytes() == bytes {
                            return Some(key);
                        }
                    }
                }
            }
            index = (index + 1) % capacity;
        }
    }

    fn find_entry_index(&self, key: *mut Object) -> usize {
        let capacity = self.capacity();
        // Safety: see find_string.
        let hash = unsafe {
            match &(*key).kind {
                crate::object::ObjectKind::String(s) => s.hash,
            }
        };
        let mut index = (hash as usize) % capacity;
        let mut tombstone: Option<usize> = None;
        loop {
            match self.entries[index].key {
                None => {
                    if self.entries[index].value.is_nil() {
                        return tombstone.unwrap_or(index);
                    } else if tombstone.is_none() {
                        tombstone = Some(index);
                    }
                }
                Some(k) if k == key => return index,
                Some(_) => {}
            }
            index = (index + 1) % capacity;
        }
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity() == 0 {
            8
        } else {
            self.capacity() * 2
        };
        let mut new_entries = Vec::with_capacity(new_capacity);
        for _ in 0..new_capacity {
            new_entries.push(Entry {
                key: None,
                value: Value::Nil,
            });
        }
        let old_entries = std::mem::replace(&mut self.entries, new_entries);
        self.count = 0;
        for entry in old_entries {
            if let Some(key) = entry.key {
                let idx = self.find_entry_index(key);
                self.entries[idx] = Entry {
                    key: Some(key),
                    value: entry.value,
                };
                self.count += 1;
            }
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
