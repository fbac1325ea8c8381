//! Variable and macro storage and text expansion.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `${name}` variable reference.
static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_]+)\}").unwrap());

/// `${name}[a,b,...]` macro call.
static CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_]+)\}\[(.*?)\]").unwrap());

/// Cap on macro-within-macro expansion; past it a call falls back to the
/// raw `\name` echo instead of recursing (self-referential templates would
/// otherwise exhaust the stack).
const MAX_EXPANSION_DEPTH: usize = 64;

#[derive(Debug, Clone)]
struct Macro {
    /// Required argument count; `None` means a zero-argument macro whose
    /// expansion ignores any supplied arguments.
    arity: Option<usize>,
    template: String,
}

/// Storage for variables (name → value) and macros (name → template),
/// with text expansion over both reference forms.
///
/// All expansion is fail-soft: an undefined name or an arity mismatch
/// echoes the raw `\name` call back into the output instead of erroring.
///
/// # Examples
///
/// ```
/// use butterxml::MacroTable;
///
/// let mut table = MacroTable::new();
/// table.define_variable("name", "Alice");
/// table.define_macro("greet", Some(1), "Hello, #1!");
///
/// assert_eq!(table.expand_variables("Hi, ${name}."), "Hi, Alice.");
/// assert_eq!(table.expand_variables("${greet}[Bob]"), "Hello, Bob!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MacroTable {
    variables: HashMap<String, String>,
    macros: HashMap<String, Macro>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a variable. The value is stored flat, with no
    /// recursion or validation.
    pub fn define_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Insert or overwrite a macro. `arity` of `Some(n)` requires exactly
    /// `n` arguments whose values replace the `#1..#n` placeholders in the
    /// template; `None` defines a zero-argument macro.
    pub fn define_macro(
        &mut self,
        name: impl Into<String>,
        arity: Option<usize>,
        template: impl Into<String>,
    ) {
        self.macros.insert(
            name.into(),
            Macro {
                arity,
                template: template.into(),
            },
        );
    }

    /// Whether `name` is a defined macro.
    pub fn contains_macro(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Expand the macro `name` with `args`.
    ///
    /// An unknown name, or a declared-arity macro called with a different
    /// argument count, yields the literal `\name` echo. Placeholders are
    /// substituted left to right as plain literals: a `#i` token introduced
    /// by an earlier argument is substituted again if a later index matches
    /// it. The substituted template is then run through
    /// [`MacroTable::expand_variables`].
    pub fn expand_macro(&self, name: &str, args: &[String]) -> String {
        self.expand_macro_at(name, args, 0)
    }

    /// Expand variable references and macro calls in `text`.
    ///
    /// Two ordered passes: first every `${name}` token is replaced with the
    /// variable's value (undefined names are left untouched), then
    /// `${name}[a,b,...]` tokens are replaced with the macro expansion, each
    /// argument trimmed of surrounding whitespace. The variable pass runs
    /// first and is unaware of a following `[...]`, so a variable and a
    /// macro sharing a name can interact. Idempotent for text containing no
    /// reference tokens.
    pub fn expand_variables(&self, text: &str) -> String {
        self.expand_variables_at(text, 0)
    }

    fn expand_macro_at(&self, name: &str, args: &[String], depth: usize) -> String {
        if depth > MAX_EXPANSION_DEPTH {
            return format!("\\{name}");
        }
        let Some(mac) = self.macros.get(name) else {
            return format!("\\{name}");
        };

        match mac.arity {
            None => self.expand_variables_at(&mac.template, depth + 1),
            Some(arity) => {
                if args.len() != arity {
                    return format!("\\{name}");
                }
                let mut expansion = mac.template.clone();
                for (i, arg) in args.iter().enumerate() {
                    expansion = expansion.replace(&format!("#{}", i + 1), arg);
                }
                self.expand_variables_at(&expansion, depth + 1)
            }
        }
    }

    fn expand_variables_at(&self, text: &str, depth: usize) -> String {
        let pass1 = VAR_RE.replace_all(text, |caps: &Captures| {
            match self.variables.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        });

        let pass2 = CALL_RE.replace_all(&pass1, |caps: &Captures| {
            let args: Vec<String> = if caps[2].is_empty() {
                Vec::new()
            } else {
                caps[2].split(',').map(|a| a.trim().to_string()).collect()
            };
            self.expand_macro_at(&caps[1], &args, depth)
        });

        pass2.into_owned()
    }
}
