mod endpoint_model_tests {
    use serde_json::json;

    use registration_client_sdk::api::model::{Endpoint, Model, MultipartFormData};
    use registration_client_sdk::api::props::ClientProps;
    use registration_client_sdk::api::registry::RegistryServiceBuilder;

    #[test]
    fn test_to_json_omits_unset_endpoint() {
        let mut endpoint = Endpoint::default();
        endpoint.set_instance_id("i-123");

        assert_eq!(endpoint.to_json(), json!({"instanceId": "i-123"}));
    }

    #[test]
    fn test_from_json_sets_only_present_keys() {
        let endpoint = Endpoint::from_json(&json!({"endpoint": "10.0.0.5:8080"})).unwrap();

        assert!(!endpoint.instance_id_is_set());
        assert!(endpoint.endpoint_is_set());
        assert_eq!(endpoint.endpoint(), Some(&"10.0.0.5:8080".to_string()));
    }

    #[test]
    fn test_json_round_trip_via_public_surface() {
        let endpoint = Endpoint {
            instance_id: Some("app_localhost_80".to_string()),
            endpoint: Some("10.0.0.5:8080".to_string()),
        };
        let round_tripped = Endpoint::from_json(&endpoint.to_json()).unwrap();
        assert!(endpoint.is_same_endpoint(&round_tripped));
    }

    #[test]
    fn test_multipart_round_trip_via_public_surface() {
        let mut endpoint = Endpoint::default();
        endpoint.set_instance_id("app_localhost_80");

        let mut form = MultipartFormData::new();
        endpoint.to_multipart(&mut form, "register.");
        assert_eq!(form.part("register.instanceId"), Some("app_localhost_80"));
        assert!(!form.has_part("register.endpoint"));

        let round_tripped = Endpoint::from_multipart(&form, "register.").unwrap();
        assert!(endpoint.is_same_endpoint(&round_tripped));
    }

    #[test]
    fn test_builder_rejects_bad_server_addr() {
        let builder =
            RegistryServiceBuilder::new(ClientProps::new().server_addr("not a host:port"));
        assert!(builder.build().is_err());
    }
}
