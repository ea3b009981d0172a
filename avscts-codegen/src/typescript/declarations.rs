//! Hoisted top-level declarations.

use std::fmt;

/// One emitted top-level TypeScript declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `export interface` with pre-rendered field lines, in record order.
    Interface {
        /// Interface name.
        name: String,
        /// Rendered field lines (`  name?: Type; // doc`).
        fields: Vec<String>,
    },
    /// `as const` object of symbols plus the literal union type derived from it.
    Enum {
        /// Enum name, shared by the constant and the type.
        name: String,
        /// Symbols in declaration order.
        symbols: Vec<String>,
    },
    /// `export type Name = Target;`
    Alias {
        /// Alias name.
        name: String,
        /// Aliased type expression.
        target: String,
    },
}

impl Declaration {
    /// Returns the exported name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Interface { name, .. } | Self::Enum { name, .. } | Self::Alias { name, .. } => {
                name
            }
        }
    }

    /// Renders the declaration as TypeScript source.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface { name, fields } => {
                write!(f, "export interface {} {{\n{}\n}}", name, fields.join("\n"))
            }
            Self::Enum { name, symbols } => {
                let entries = symbols
                    .iter()
                    .map(|symbol| {
                        let literal = serde_json::Value::String(symbol.clone());
                        format!("  {}: {}", symbol, literal)
                    })
                    .collect::<Vec<_>>()
                    .join(",\n");
                writeln!(f, "export const {} = {{\n{}\n}} as const;", name, entries)?;
                writeln!(f)?;
                write!(
                    f,
                    "export type {0} = typeof {0}[keyof typeof {0}];",
                    name
                )
            }
            Self::Alias { name, target } => write!(f, "export type {} = {};", name, target),
        }
    }
}
