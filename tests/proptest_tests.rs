use inclang::error::{Error, SemanticError};
use inclang::{run, RunOptions};
use proptest::prelude::*;

fn output(input: &str) -> Result<String, Error> {
    let mut out = vec![];
    run(input, &mut out, &RunOptions::default())?;
    Ok(String::from_utf8(out).unwrap())
}

fn nest(inner: String, depth: usize) -> String {
    format!("{}{}{}", "inc(".repeat(depth), inner, ")".repeat(depth))
}

proptest! {
    #[test]
    fn inc_nests_additively(n in 0i64..i64::MAX - 3) {
        let out = output(&format!("print({});", nest(n.to_string(), 3))).unwrap();
        prop_assert_eq!(out, format!("Output: {}\n", n + 3));
    }

    #[test]
    fn prints_follow_source_order(
        decls in prop::collection::vec(("[a-z][a-z0-9_]{0,6}", 0i64..1_000_000, 0usize..5), 1..10)
    ) {
        let mut source = String::new();
        let mut expected = String::new();
        for (name, value, depth) in decls.iter() {
            source.push_str(&format!("{} = {};\n", name, value));
            source.push_str(&format!("print({});\n", nest(name.clone(), *depth)));
            expected.push_str(&format!("Output: {}\n", value + *depth as i64));
        }
        prop_assume!(decls.iter().all(|(name, _, _)| name != "inc" && name != "print"));
        prop_assert_eq!(output(&source).unwrap(), expected);
    }

    #[test]
    fn redeclaration_keeps_latest(first in 0i64..1000, second in 0i64..1000) {
        let out = output(&format!("v={};v={};print(v);", first, second)).unwrap();
        prop_assert_eq!(out, format!("Output: {}\n", second));
    }

    #[test]
    fn undeclared_name_never_runs(value in 0i64..1000, depth in 0usize..8) {
        let source = format!("print({});a={};print(b);", value, value);
        let result = output(&source);
        let expected_name = "b".to_string();
        let rejected = matches!(
            result,
            Err(Error::Semantic(SemanticError::UndeclaredVariable { name })) if name == expected_name
        );
        prop_assert!(rejected);

        let nested = format!("print({});", nest("missing".to_string(), depth));
        let nested_rejected = matches!(output(&nested), Err(Error::Semantic(_)));
        prop_assert!(nested_rejected);
    }
}
