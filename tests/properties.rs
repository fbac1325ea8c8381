//! Property tests for the expansion algebra.

use butterxml::MacroTable;
use proptest::prelude::*;

proptest! {
    /// Expansion is the identity (and thus idempotent) on text containing
    /// no reference tokens.
    #[test]
    fn expansion_identity_without_tokens(text in "[A-Za-z0-9 .,!?-]{0,64}") {
        let table = MacroTable::new();
        let once = table.expand_variables(&text);
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(&table.expand_variables(&once), &text);
    }

    /// Defining `x` to v and expanding `${x}` yields exactly v.
    #[test]
    fn variable_roundtrip(
        name in "[A-Za-z_][A-Za-z0-9_]{0,8}",
        value in "[A-Za-z0-9 .,!?-]{0,32}",
    ) {
        let mut table = MacroTable::new();
        table.define_variable(&name, &value);
        prop_assert_eq!(table.expand_variables(&format!("${{{name}}}")), value);
    }

    /// A declared-arity macro echoes its raw call for any wrong argument
    /// count.
    #[test]
    fn arity_mismatch_always_echoes(arity in 0usize..4, extra in 1usize..4) {
        let mut table = MacroTable::new();
        table.define_macro("m", Some(arity), "#1 #2 #3");
        let args: Vec<String> = (0..arity + extra).map(|i| i.to_string()).collect();
        prop_assert_eq!(table.expand_macro("m", &args), r"\m");
    }

    /// A declared-arity macro substitutes its template for exactly the right
    /// argument count.
    #[test]
    fn matching_arity_substitutes(value in "[A-Za-z0-9 ]{0,16}") {
        let mut table = MacroTable::new();
        table.define_macro("wrap", Some(1), "<<#1>>");
        prop_assert_eq!(
            table.expand_macro("wrap", &[value.clone()]),
            format!("<<{value}>>")
        );
    }
}
