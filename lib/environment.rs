use std::collections::HashMap;

use crate::ast::ParseNode;

#[derive(Debug, PartialEq, Clone)]
pub struct FunctionDef {
    pub params: Vec<String>,
    pub body: ParseNode,
}

/// Session-wide mutable state: global variables, declared functions, and the
/// stack of call frames installed while function bodies run. Reads search
/// frames innermost-first, then the globals; writes land in the innermost
/// frame already binding the name, else in the globals.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Environment {
    variables: HashMap<String, f64>,
    functions: HashMap<String, FunctionDef>,
    frames: Vec<HashMap<String, f64>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_var(&self, name: &str) -> Option<f64> {
        for frame in self.frames.iter().rev() {
            if let Some(value) = frame.get(name) {
                return Some(*value);
            }
        }
        self.variables.get(name).copied()
    }

    pub fn set_var(&mut self, name: &str, value: f64) {
        for frame in self.frames.iter_mut().rev() {
            if let Some(slot) = frame.get_mut(name) {
                *slot = value;
                return;
            }
        }
        self.variables.insert(name.to_string(), value);
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Redeclaring a name replaces the previous definition; functions are
    /// never removed.
    pub fn declare_function(&mut self, name: &str, def: FunctionDef) {
        self.functions.insert(name.to_string(), def);
    }

    pub fn push_frame(&mut self, bindings: HashMap<String, f64>) {
        self.frames.push(bindings);
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }
}
