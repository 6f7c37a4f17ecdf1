//! Integration tests for inspect functionality.

#[cfg(test)]
mod integration_tests {
    use mxabi_core::{
        mxabi_inspect::{self, Error, FormulaArgsBuilder, InspectArgsBuilder},
        mxabi_types::ParseError,
    };
    use serde_json::Value;

    fn testdata(file: &str) -> String {
        format!("{}/tests/testdata/{file}", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_inspect_adder() {
        mxabi_tracing::init_test_tracing();

        let args = InspectArgsBuilder::new()
            .target(testdata("adder.abi.json"))
            .build()
            .expect("failed to build InspectArgs");

        let result = mxabi_inspect::inspect(args).expect("failed to inspect");
        let registry = &result.registry;

        assert_eq!(registry.name, "Adder");
        assert_eq!(registry.endpoint_names(), vec!["getSum", "add"]);
        assert!(registry.endpoint("getSum").expect("getSum exists").modifiers.is_readonly());
        assert_eq!(
            registry.endpoint("add").expect("add exists").description,
            "Add desired amount to the storage variable."
        );

        // unnamed outputs get the placeholder name
        assert_eq!(registry.endpoint("getSum").expect("getSum exists").outputs[0].name, "?");
    }

    #[test]
    fn test_inspect_multisig() {
        mxabi_tracing::init_test_tracing();

        let args = InspectArgsBuilder::new()
            .target(testdata("multisig.abi.json"))
            .build()
            .expect("failed to build InspectArgs");

        let result = mxabi_inspect::inspect(args).expect("failed to inspect");
        let registry = &result.registry;

        let constructor = registry.constructor.as_ref().expect("constructor is present");
        assert_eq!(constructor.signature(), "constructor(quorum: u32, board: variadic<Address>)");

        let deposit = registry.endpoint("deposit").expect("deposit exists");
        assert!(deposit.modifiers.is_payable_in("EGLD"));
        assert!(deposit.modifiers.is_payable_in("USDC-c76f1f"));

        let members = registry.endpoint("getAllBoardMembers").expect("endpoint exists");
        assert_eq!(members.outputs[0].type_formula.depth(), 4);
        assert_eq!(
            members.outputs[0].type_formula.to_string(),
            "MultiResultVec<MultiResult2<Address, Option<List<TokenIdentifier>>>>"
        );

        assert_eq!(registry.types.len(), 3);
        assert_eq!(registry.types[2].to_string(), "Option<List<EsdtTokenPayment>>");
    }

    #[test]
    fn test_inspect_output_document() {
        let args = InspectArgsBuilder::new()
            .target(testdata("multisig.abi.json"))
            .build()
            .expect("failed to build InspectArgs");

        let result = mxabi_inspect::inspect(args).expect("failed to inspect");
        let document: Value = serde_json::from_str(&result.to_json(false).expect("failed to render"))
            .expect("output is valid JSON");

        assert_eq!(document["name"], "Multisig");
        assert_eq!(document["endpoints"].as_array().map(|e| e.len()), Some(6));
        assert_eq!(document["endpoints"][0]["payableInTokens"][0], "*");
        assert_eq!(document["endpoints"][0]["inputs"], Value::Array(vec![]));
        assert_eq!(document["endpoints"][2]["outputs"][0]["description"], "N/A");
        assert_eq!(document["constructor"]["inputs"][1]["type"], "variadic<Address>");
    }

    #[test]
    fn test_inspect_malformed_type() {
        let args = InspectArgsBuilder::new()
            .target(testdata("malformed.abi.json"))
            .build()
            .expect("failed to build InspectArgs");

        let err = mxabi_inspect::inspect(args).expect_err("malformed type should fail");
        match err {
            Error::AbiError(e) => {
                assert!(e.is_parse_error());
                assert!(e.to_string().contains("List<EsdtTokenPayment"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inspect_with_tight_limits() {
        let args = InspectArgsBuilder::new()
            .target(testdata("multisig.abi.json"))
            .max_type_depth(Some(3))
            .build()
            .expect("failed to build InspectArgs");

        let err = mxabi_inspect::inspect(args).expect_err("nesting should exceed the limit");
        assert!(err.to_string().contains("deeper than 3 levels"));

        // the adder ABI has no nested types
        let args = InspectArgsBuilder::new()
            .target(testdata("adder.abi.json"))
            .max_type_depth(Some(0))
            .build()
            .expect("failed to build InspectArgs");
        assert!(mxabi_inspect::inspect(args).is_ok());
    }

    #[test]
    fn test_formula() {
        let args = FormulaArgsBuilder::new()
            .expression("variadic<MultiValue2<BigUint,Address>>".to_string())
            .build()
            .expect("failed to build FormulaArgs");

        let result = mxabi_inspect::formula(args).expect("failed to parse formula");
        assert_eq!(result.canonical(), "variadic<MultiValue2<BigUint, Address>>");
        assert_eq!(result.formula.type_parameters()[0].type_parameters().len(), 2);

        let args = FormulaArgsBuilder::new()
            .expression("List<u8>>".to_string())
            .build()
            .expect("failed to build FormulaArgs");
        match mxabi_inspect::formula(args) {
            Err(Error::AbiError(mxabi_core::mxabi_types::Error::Parse { source, .. })) => {
                assert_eq!(source, ParseError::UnmatchedEnd)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
