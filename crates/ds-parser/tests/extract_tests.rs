#[cfg(test)]
mod extract_tests {
    use ds_core::{Declaration, DeclarationKind, Param, UNKNOWN};
    use ds_parser::{extract, ParseError};

    fn extract_at(source: &str, line: u32) -> Option<Declaration> {
        extract(source, line).expect("parse should succeed")
    }

    fn extract_one(source: &str) -> Declaration {
        extract_at(source, 1).expect("should bind a declaration")
    }

    fn param<'a>(decl: &'a Declaration, name: &str) -> &'a Param {
        decl.params
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("no param named {name}"))
    }

    #[test]
    fn extracts_function_name() {
        let decl = extract_one("function helloWorld () {}");
        assert_eq!(decl.name, "helloWorld");
        assert_eq!(decl.kind, DeclarationKind::Function);
    }

    #[test]
    fn binds_function_on_requested_line() {
        let source = "function helloWorld() {}\n\nfunction myWorld() {}\n\nfunction anotherWorld() {}";
        assert_eq!(extract_at(source, 3).unwrap().name, "myWorld");
    }

    #[test]
    fn binds_function_one_line_below() {
        let source = "function helloWorld() {}\n\nfunction myWorld() {}\n\nfunction anotherWorld() {}";
        assert_eq!(extract_at(source, 2).unwrap().name, "myWorld");
    }

    #[test]
    fn no_match_beyond_last_declaration() {
        let source = "function helloWorld() {}\n\nfunction myWorld() {}";
        assert!(extract_at(source, 999).is_none(), "absent, not an error");
    }

    #[test]
    fn names_var_function_expression() {
        assert_eq!(extract_one("var helloWord = function () {};").name, "helloWord");
    }

    #[test]
    fn names_let_function_expression() {
        assert_eq!(extract_one("let helloWord = function () {};").name, "helloWord");
    }

    #[test]
    fn names_let_arrow() {
        assert_eq!(extract_one("let helloWorld = () => {};").name, "helloWorld");
    }

    #[test]
    fn names_const_function_expression() {
        assert_eq!(extract_one("const helloWord = function () {};").name, "helloWord");
    }

    #[test]
    fn names_const_arrow() {
        assert_eq!(extract_one("const helloWorld = () => {};").name, "helloWorld");
    }

    #[test]
    fn names_member_assignment_from_property() {
        assert_eq!(extract_one("this.helloWorld = function () {}").name, "helloWorld");
    }

    #[test]
    fn names_member_assignment_without_spaces() {
        assert_eq!(extract_one("this.helloWorld = function(){}").name, "helloWorld");
    }

    #[test]
    fn returns_flag_starts_singular() {
        let decl = extract_one("function helloWorld() {}");
        assert!(!decl.returns.returns);
    }

    #[test]
    fn shebang_does_not_shift_lines() {
        let source = "#!/bin/env node\n\nfunction bob(){}";
        assert_eq!(extract_at(source, 3).unwrap().name, "bob");
    }

    #[test]
    fn extracts_object_method_shorthand() {
        let source = "const obj = {\n  foo(arg) {\n    return arg;\n  }\n};";
        let decl = extract_at(source, 2).unwrap();
        assert_eq!(decl.name, "foo");
        assert_eq!(decl.kind, DeclarationKind::Function);
    }

    #[test]
    fn anonymous_default_export_function() {
        let source = "\nexport default function () {\n  return 'bar';\n}";
        assert_eq!(extract_one(source).name, UNKNOWN);
    }

    #[test]
    fn anonymous_default_export_arrow() {
        assert_eq!(extract_one("export default () => {};").name, UNKNOWN);
    }

    mod location {
        use super::*;

        #[test]
        fn column_of_function() {
            assert_eq!(extract_one("    function helloWorld() {}").location.column, 4);
        }

        #[test]
        fn column_of_const_function_expression() {
            assert_eq!(extract_one("    const helloWorld = function () {}").location.column, 4);
        }

        #[test]
        fn column_of_const_arrow() {
            assert_eq!(extract_one("    const helloWorld = () => {}").location.column, 4);
        }

        #[test]
        fn column_of_export_keyword() {
            assert_eq!(extract_one("  export function hello() {}").location.column, 2);
        }

        #[test]
        fn column_of_export_keyword_for_arrow() {
            assert_eq!(extract_one("  export const hello = () => {}").location.column, 2);
        }

        #[test]
        fn column_of_export_keyword_for_function_expression() {
            assert_eq!(extract_one("  export const hello = function () {}").location.column, 2);
        }

        #[test]
        fn column_of_default_export() {
            assert_eq!(extract_one("   export default function hello() {}").location.column, 3);
        }

        #[test]
        fn column_of_async_keyword() {
            assert_eq!(extract_one("  async function hello() {}").location.column, 2);
        }

        #[test]
        fn column_of_exported_async_function() {
            assert_eq!(extract_one("  export async function hello() {}").location.column, 2);
        }

        #[test]
        fn line_is_above_the_declaration() {
            let source = "\nfunction a() {}\n\nfunction b() {}";
            assert_eq!(extract_at(source, 2).unwrap().location.line, 0);
        }

        #[test]
        fn line_clamps_on_the_first_row() {
            assert_eq!(extract_one("function b() {}").location.line, 0);
        }
    }

    mod parameters {
        use super::*;

        #[test]
        fn extracts_a_parameter() {
            let decl = extract_one("function helloWorld(a) {}");
            assert_eq!(decl.params, vec![Param::named("a")]);
        }

        #[test]
        fn keeps_declaration_order() {
            let decl = extract_one("function helloWorld(a, b, c, bobblyboo, d) {}");
            let names: Vec<&str> = decl.params.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, ["a", "b", "c", "bobblyboo", "d"]);
        }

        #[test]
        fn number_default() {
            let decl = extract_one("function helloWorld(a = 1) {}");
            let p = param(&decl, "a");
            assert_eq!(p.type_name.as_deref(), Some("number"));
            assert_eq!(p.default_value.as_deref(), Some("1"));
        }

        #[test]
        fn string_default() {
            let decl = extract_one("function helloWorld(b = 'default') {}");
            let p = param(&decl, "b");
            assert_eq!(p.type_name.as_deref(), Some("string"));
            assert_eq!(p.default_value.as_deref(), Some("default"));
        }

        #[test]
        fn boolean_default() {
            let decl = extract_one("function helloWorld(b = false) {}");
            let p = param(&decl, "b");
            assert_eq!(p.type_name.as_deref(), Some("boolean"));
            assert_eq!(p.default_value.as_deref(), Some("false"));
        }

        #[test]
        fn object_default() {
            let decl = extract_one("function helloWorld(c = {}) {}");
            let p = param(&decl, "c");
            assert_eq!(p.type_name.as_deref(), Some("object"));
            assert_eq!(p.default_value.as_deref(), Some("{}"));
        }

        #[test]
        fn array_default() {
            let decl = extract_one("function helloWorld(d = []) {}");
            let p = param(&decl, "d");
            assert_eq!(p.type_name.as_deref(), Some("array"));
            assert_eq!(p.default_value.as_deref(), Some("[]"));
        }

        #[test]
        fn null_default() {
            let decl = extract_one("function helloWorld(d = null) {}");
            let p = param(&decl, "d");
            assert_eq!(p.type_name.as_deref(), Some("null"));
            assert_eq!(p.default_value.as_deref(), Some("null"));
        }

        #[test]
        fn arrow_function_default() {
            let decl = extract_one("function helloWorld(d = () => {}) {}");
            let p = param(&decl, "d");
            assert_eq!(p.type_name.as_deref(), Some("function"));
            assert_eq!(p.default_value.as_deref(), Some("() => {}"));
        }

        #[test]
        fn call_default_degrades_to_sentinel() {
            let decl = extract_one("function helloWorld(d = func()) {}");
            let p = param(&decl, "d");
            assert_eq!(p.type_name.as_deref(), Some(UNKNOWN));
            assert_eq!(p.default_value.as_deref(), Some(UNKNOWN));
        }

        #[test]
        fn new_expression_default_flattens_to_empty_object() {
            // Known approximation: any constructed value documents as an
            // empty object literal, whatever the constructor is.
            let decl = extract_one("function helloWorld(d = new Thing()) {}");
            let p = param(&decl, "d");
            assert_eq!(p.type_name.as_deref(), Some("object"));
            assert_eq!(p.default_value.as_deref(), Some("{}"));
        }

        #[test]
        fn identifier_default_degrades_to_sentinel() {
            let source = "const defaults = {};\nfunction name(a = defaults) {}";
            let decl = extract_at(source, 2).unwrap();
            let p = param(&decl, "a");
            assert_eq!(p.type_name.as_deref(), Some(UNKNOWN));
            assert_eq!(p.default_value.as_deref(), Some(UNKNOWN));
        }

        #[test]
        fn member_expression_default_degrades_to_sentinel() {
            let decl = extract_one("export const func = (baseUrl = config.apiUrl) => {}");
            let p = param(&decl, "baseUrl");
            assert_eq!(p.type_name.as_deref(), Some(UNKNOWN));
            assert_eq!(p.default_value.as_deref(), Some(UNKNOWN));
        }

        #[test]
        fn rest_parameter_is_an_array() {
            let decl = extract_one("function helloWorld(...stuff) {}");
            let p = param(&decl, "stuff");
            assert_eq!(p.type_name.as_deref(), Some("array"));
            assert!(p.default_value.is_none());
        }

        #[test]
        fn destructured_parameters_flatten_under_a_placeholder() {
            let decl = extract_one("function helloWorld({ a, b }) {}");
            let placeholder = param(&decl, UNKNOWN);
            assert_eq!(placeholder.type_name.as_deref(), Some("object"));
            assert!(placeholder.parent.is_none());
            assert_eq!(param(&decl, "a").parent.as_deref(), Some(UNKNOWN));
            assert_eq!(param(&decl, "b").parent.as_deref(), Some(UNKNOWN));
        }

        #[test]
        fn destructured_defaults_keep_inference() {
            let decl = extract_one("function helloWorld({ a = 1, b = 'hello', c = func() }) {}");
            let a = param(&decl, "a");
            assert_eq!(a.parent.as_deref(), Some(UNKNOWN));
            assert_eq!(a.type_name.as_deref(), Some("number"));
            assert_eq!(a.default_value.as_deref(), Some("1"));
            let b = param(&decl, "b");
            assert_eq!(b.type_name.as_deref(), Some("string"));
            assert_eq!(b.default_value.as_deref(), Some("hello"));
            let c = param(&decl, "c");
            assert_eq!(c.type_name.as_deref(), Some(UNKNOWN));
            assert_eq!(c.default_value.as_deref(), Some(UNKNOWN));
        }

        #[test]
        fn renamed_destructured_field_uses_bound_name() {
            let decl = extract_one("function helloWorld({ a: renamed }) {}");
            assert_eq!(param(&decl, "renamed").parent.as_deref(), Some(UNKNOWN));
        }

        #[test]
        fn nested_destructuring_flattens_depth_first() {
            let decl = extract_one("function helloWorld({ a: { b } }) {}");
            let names: Vec<(&str, Option<&str>)> = decl
                .params
                .iter()
                .map(|p| (p.name.as_str(), p.parent.as_deref()))
                .collect();
            assert_eq!(
                names,
                [(UNKNOWN, None), (UNKNOWN, Some(UNKNOWN)), ("b", Some(UNKNOWN))]
            );
        }

        #[test]
        fn object_rest_spread_field_is_an_array() {
            let decl = extract_one("const foo = ({ a, ...rest }) => ({ a, ...rest });");
            assert_eq!(decl.name, "foo");
            let rest = param(&decl, "rest");
            assert_eq!(rest.parent.as_deref(), Some(UNKNOWN));
            assert_eq!(rest.type_name.as_deref(), Some("array"));
        }
    }

    mod classes {
        use super::*;

        #[test]
        fn class_definition_has_class_kind() {
            let source = "class Foo {\n  constructor() {}\n}";
            let decl = extract_at(source, 1).unwrap();
            assert_eq!(decl.kind, DeclarationKind::Class);
            assert_eq!(decl.name, "Foo");
            assert!(decl.params.is_empty(), "classes carry no params");
        }

        #[test]
        fn extends_names_the_superclass() {
            let source = "class Foo extends Bar {\n  constructor() {}\n}";
            let decl = extract_at(source, 1).unwrap();
            assert_eq!(decl.extends.as_deref(), Some("Bar"));
        }

        #[test]
        fn class_method_kind_and_name() {
            let source = "class Foo extends Bar {\n  constructor() {}\n}";
            let decl = extract_at(source, 2).unwrap();
            assert_eq!(decl.name, "constructor");
            assert_eq!(decl.kind, DeclarationKind::ClassMethod);
            assert!(!decl.is_static);
        }

        #[test]
        fn static_methods_set_the_modifier() {
            let source = "class Foo extends Bar {\n  static myStaticMethod() {}\n}";
            let decl = extract_at(source, 2).unwrap();
            assert!(decl.is_static);
        }

        #[test]
        fn class_properties_do_not_bind() {
            let source = "class Foo {\n  static props = {}\n}";
            assert!(extract_at(source, 2).is_none());
        }
    }

    mod dialect_tolerance {
        use super::*;

        #[test]
        fn type_annotated_signature_parses() {
            let source = "\n// @flow\nfunction bar(x): string {\n  return x.length;\n}\nbar('Hello, world!');";
            assert_eq!(extract_at(source, 2).unwrap().name, "bar");
        }

        #[test]
        fn jsx_body_parses() {
            let decl = extract_one("const title = ({ name }) => <h1>{name}</h1>");
            assert_eq!(decl.name, "title");
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn invalid_source_is_a_syntax_error() {
            let err = extract("afoahfa afohafo^^h$\"a aflajfl", 1).unwrap_err();
            match &err {
                ParseError::InvalidSource { .. } => {}
                other => panic!("expected InvalidSource, got {other:?}"),
            }
            assert!(err.to_string().contains("expects valid JavaScript. Error parsing:"));
        }

        #[test]
        fn array_pattern_parameter_is_rejected() {
            let err = extract("function f([a, b]) {}", 1).unwrap_err();
            match err {
                ParseError::UnsupportedParam { kind } => assert_eq!(kind, "array_pattern"),
                other => panic!("expected UnsupportedParam, got {other:?}"),
            }
        }
    }
}
