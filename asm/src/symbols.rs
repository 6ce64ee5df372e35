use indexmap::IndexMap;

/// Variables are allocated upward from here, just past the virtual
/// registers.
const VAR_BASE: u16 = 16;

/// Symbol table shared by labels (filled during pass 1) and variables
/// (allocated during pass 2), seeded with the predefined symbols.
///
/// Insertion is first-write-wins, so a label and a variable with the same
/// name collide silently; the original assembler has the same gap.
pub struct SymbolTable {
    table: IndexMap<String, u16>,
    next_var: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = IndexMap::new();
        for (name, addr) in arch::symbol::PREDEFINED {
            table.insert(name.to_string(), addr);
        }
        SymbolTable {
            table,
            next_var: VAR_BASE,
        }
    }

    /// Re-inserting an existing key is a no-op.
    pub fn insert(&mut self, name: &str, addr: u16) {
        self.table.entry(name.to_string()).or_insert(addr);
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.table.get(name).copied()
    }

    /// Address of `name`; a symbol seen for the first time becomes a
    /// variable in the next free data cell.
    pub fn resolve(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.get(name) {
            return addr;
        }
        let addr = self.next_var;
        self.next_var += 1;
        self.table.insert(name.to_string(), addr);
        addr
    }
}
