//! Built-in functions

pub mod math;

use crate::error::FormulaResult;
use std::collections::HashMap;

/// Function implementation signature
pub type FunctionImpl = fn(&[f64]) -> FormulaResult<f64>;

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Function registry
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionDef>,
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };

        registry.register_math_functions();

        registry
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(&name.to_uppercase())
    }

    /// Register a function
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.to_uppercase(), def);
    }

    /// Names of all registered functions, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.values().map(|def| def.name).collect();
        names.sort_unstable();
        names
    }

    fn register_math_functions(&mut self) {
        let defs: [(&'static str, usize, Option<usize>, FunctionImpl); 9] = [
            ("ABS", 1, Some(1), math::fn_abs),
            ("SQRT", 1, Some(1), math::fn_sqrt),
            ("FLOOR", 1, Some(1), math::fn_floor),
            ("CEILING", 1, Some(1), math::fn_ceiling),
            ("CEIL", 1, Some(1), math::fn_ceiling),
            ("ROUND", 1, Some(2), math::fn_round),
            ("MIN", 1, None, math::fn_min),
            ("MAX", 1, None, math::fn_max),
            ("MOD", 2, Some(2), math::fn_mod),
        ];

        for (name, min_args, max_args, implementation) in defs {
            self.register(FunctionDef {
                name,
                min_args,
                max_args,
                implementation,
            });
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
