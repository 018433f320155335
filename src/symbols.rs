use phf::phf_map;
use std::collections::HashMap;

/// Predefined symbols (compile-time perfect hash map)
pub static PREDEFINED: phf::Map<&'static str, u16> = phf_map! {
    "R0" => 0, "R1" => 1, "R2" => 2, "R3" => 3,
    "R4" => 4, "R5" => 5, "R6" => 6, "R7" => 7,
    "R8" => 8, "R9" => 9, "R10" => 10, "R11" => 11,
    "R12" => 12, "R13" => 13, "R14" => 14, "R15" => 15,
    "SP" => 0, "LCL" => 1, "ARG" => 2, "THIS" => 3, "THAT" => 4,
    "SCREEN" => 16384, "KBD" => 24576,
};

/// RAM address handed to the first user-defined variable.
pub const VARIABLE_BASE: u16 = 16;

/// Merged symbol table: user variables, label declarations, and the
/// predefined constants above, looked up in that order.
pub struct SymbolTable {
    variables: HashMap<String, u16>,
    labels: HashMap<String, u16>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            labels: HashMap::with_capacity(32),
        }
    }

    /// Record a label's instruction address. A repeated name overwrites the
    /// earlier entry (last declaration wins).
    pub fn define_label(&mut self, name: &str, address: u16) {
        self.labels.insert(name.to_string(), address);
    }

    /// Record a variable's RAM address. Callers must check `contains` first;
    /// a name known to any layer is never a new variable.
    pub fn define_variable(&mut self, name: &str, address: u16) {
        self.variables.insert(name.to_string(), address);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.variables
            .get(name)
            .or_else(|| self.labels.get(name))
            .copied()
            .or_else(|| PREDEFINED.get(name).copied())
    }
}
