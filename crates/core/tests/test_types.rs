//! Integration tests for the ABI model.

#[cfg(test)]
mod integration_tests {
    use mxabi_core::mxabi_types::{
        AbiRegistry, EndpointDefinition, EndpointParameterDefinition, ParserLimits, TypeFormula,
        TypeFormulaParser,
    };
    use serde_json::json;

    fn testdata(file: &str) -> String {
        format!("{}/tests/testdata/{file}", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_parse_expressions() {
        let parser = TypeFormulaParser::new();

        let cases = [
            ("i64", "i64"),
            ("MultiResultVec<MultiResult2<Address, u64>>", "MultiResultVec<MultiResult2<Address, u64>>"),
            ("Option < List < Address > >", "Option<List<Address>>"),
            ("variadic<bytes,BigUint,u8>", "variadic<bytes, BigUint, u8>"),
        ];

        for (expression, expected) in cases {
            let formula = parser.parse_expression(expression).expect("failed to parse expression");
            assert_eq!(formula.to_string(), expected);

            // the canonical form parses back to the same formula
            assert_eq!(parser.parse_expression(expected).expect("failed to reparse"), formula);
        }
    }

    #[test]
    fn test_registry_file_round_trip() {
        let registry =
            AbiRegistry::from_file(testdata("multisig.abi.json")).expect("failed to load registry");

        let output = std::env::temp_dir().join("mxabi-core-tests").join("multisig.abi.json");
        registry.to_file(&output, true).expect("failed to write registry");

        let reloaded = AbiRegistry::from_file(&output).expect("failed to reload registry");
        assert_eq!(reloaded, registry);
    }

    #[test]
    fn test_registry_limits_apply_to_every_type() {
        let parser = TypeFormulaParser::with_limits(ParserLimits { max_depth: 64, max_tokens: 4 });

        assert!(AbiRegistry::from_file_with(testdata("adder.abi.json"), &parser).is_ok());

        let err = AbiRegistry::from_file_with(testdata("multisig.abi.json"), &parser)
            .expect_err("multisig types exceed the token limit");
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_build_registry_by_hand() {
        let mut add = EndpointDefinition::new("add");
        add.modifiers.mutability = "mutable".to_string();
        add.inputs.push(
            EndpointParameterDefinition::new(TypeFormula::leaf("BigUint")).with_name("value"),
        );

        let registry = AbiRegistry {
            name: "Adder".to_string(),
            constructor: None,
            endpoints: vec![add],
            types: vec![],
        };

        assert_eq!(
            registry.to_document(),
            json!({
                "name": "Adder",
                "constructor": null,
                "endpoints": [{
                    "name": "add",
                    "description": "N/A",
                    "inputs": [{ "name": "value", "description": "N/A", "type": "BigUint" }],
                    "outputs": [],
                    "mutability": "mutable",
                    "payableInTokens": []
                }],
                "types": []
            })
        );
    }
}
