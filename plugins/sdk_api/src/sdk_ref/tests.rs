use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct StubSdk {
    api_level: ApiLevel,
    supported: bool,
}

impl Sdk for StubSdk {
    fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    fn android_version(&self) -> Option<&str> {
        Some("14")
    }

    fn android_code_name(&self) -> Option<&str> {
        Some("UpsideDownCake")
    }

    fn jar_path(&self) -> Option<&Path> {
        None
    }

    fn is_supported(&self) -> bool {
        self.supported
    }
}

fn stub(level: u32, supported: bool) -> Arc<dyn Sdk> {
    Arc::new(StubSdk {
        api_level: ApiLevel::new(level),
        supported,
    })
}

#[test]
fn known_passes_accessors_through() {
    let sdk = SdkRef::from(stub(34, true));

    assert!(sdk.is_known());
    assert!(sdk.is_supported());
    assert_eq!(sdk.api_level(), ApiLevel::new(34));
    assert_eq!(sdk.android_version(), Some("14"));
    assert_eq!(sdk.android_code_name(), Some("UpsideDownCake"));
    assert_eq!(sdk.to_string(), "SDK 34");
}

#[test]
fn unknown_is_not_known() {
    let sdk = SdkRef::from(UnknownSdk::new(ApiLevel::new(4321)));

    assert!(!sdk.is_known());
    assert!(!sdk.is_supported());
    assert!(sdk.as_known().is_none());
    assert_eq!(sdk.to_string(), "unknown SDK 4321");
}

#[test]
fn same_as_is_pointer_identity() {
    let original = stub(21, true);
    let twin = stub(21, true);
    let sdk = SdkRef::from(Arc::clone(&original));

    assert!(sdk.same_as(&original));
    assert!(!sdk.same_as(&twin));
    // Equal by level even though they are different descriptors.
    assert_eq!(sdk, SdkRef::from(twin));
}

#[test]
fn orders_by_level() {
    let mut sdks = vec![
        SdkRef::from(stub(30, true)),
        SdkRef::from(UnknownSdk::new(ApiLevel::new(5))),
        SdkRef::from(stub(19, false)),
    ];
    sdks.sort();

    let levels: Vec<u32> = sdks.iter().map(|sdk| sdk.api_level().raw()).collect();
    assert_eq!(levels, vec![5, 19, 30]);
}

#[test]
fn default_unsupported_message_names_level() {
    let sdk = SdkRef::from(stub(16, false));

    assert_eq!(sdk.unsupported_message(), "API level 16 is not supported");
    let err = sdk
        .verify_supported("LegacyTest")
        .expect_err("unsupported SDK must be rejected");
    assert_eq!(
        err.to_string(),
        "Failed to create a runtime for LegacyTest: API level 16 is not supported"
    );
}

#[test]
fn verify_supported_accepts_supported() {
    assert_eq!(SdkRef::from(stub(33, true)).verify_supported("AnyTest"), Ok(()));
}
