//! A built registry shared across threads and components.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use sdk_api::{ApiLevel, Sdk, SdkRef};
use sdk_registry::{init_tracing, AppSdk, PickerConfig, SdkPicker, SdkRegistry, SdkRequest};

#[derive(Debug)]
struct PlatformSdk {
    api_level: ApiLevel,
    version: &'static str,
    code_name: &'static str,
    jar: PathBuf,
    supported: bool,
}

impl Sdk for PlatformSdk {
    fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    fn android_version(&self) -> Option<&str> {
        Some(self.version)
    }

    fn android_code_name(&self) -> Option<&str> {
        Some(self.code_name)
    }

    fn jar_path(&self) -> Option<&Path> {
        Some(&self.jar)
    }

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn unsupported_message(&self) -> String {
        format!("API level {} requires a newer JDK", self.api_level)
    }
}

fn platform(
    level: u32,
    version: &'static str,
    code_name: &'static str,
    supported: bool,
) -> Arc<dyn Sdk> {
    Arc::new(PlatformSdk {
        api_level: ApiLevel::new(level),
        version,
        code_name,
        jar: PathBuf::from(format!("android-all-{version}.jar")),
        supported,
    })
}

fn build() -> Arc<SdkRegistry> {
    init_tracing();
    let source = || {
        vec![
            platform(34, "14", "UpsideDownCake", false),
            platform(28, "9", "P", true),
            platform(33, "13", "Tiramisu", true),
        ]
    };
    Arc::new(SdkRegistry::new(&source).unwrap())
}

#[test]
fn metadata_is_passed_through_unchanged() {
    let registry = build();

    let sdk = registry.get(ApiLevel::new(33));

    assert_eq!(sdk.android_version(), Some("13"));
    assert_eq!(sdk.android_code_name(), Some("Tiramisu"));
    assert_eq!(sdk.jar_path(), Some(Path::new("android-all-13.jar")));
    assert_eq!(sdk.to_string(), "SDK 33");
}

#[test]
fn unsupported_sdk_reports_its_own_reason() {
    let registry = build();

    let err = registry
        .get(ApiLevel::new(34))
        .verify_supported("CameraTest")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to create a runtime for CameraTest: API level 34 requires a newer JDK"
    );
}

#[test]
fn concurrent_readers_see_the_same_registry() {
    let registry = build();

    let results: Vec<(u32, Vec<u32>, bool)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    let max = registry.max_supported().unwrap().api_level().raw();
                    let supported: Vec<u32> = registry
                        .supported()
                        .iter()
                        .map(|sdk| sdk.api_level().raw())
                        .collect();
                    let unknown = registry.get(ApiLevel::new(1)).is_known();
                    (max, supported, unknown)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, (33, vec![28, 33], false));
    }
}

#[test]
fn picker_and_host_share_one_registry() {
    let registry = build();
    let picker = SdkPicker::new(Arc::clone(&registry), PickerConfig::default());

    let request = SdkRequest {
        all: true,
        ..SdkRequest::default()
    };
    let app = AppSdk {
        min: ApiLevel::new(28),
        target: ApiLevel::new(33),
        max: None,
    };
    let selected = picker.select(&request, &app).unwrap();

    assert!(Arc::ptr_eq(picker.registry(), &registry));
    assert_eq!(
        selected.iter().map(SdkRef::api_level).collect::<Vec<_>>(),
        vec![ApiLevel::new(28), ApiLevel::new(33), ApiLevel::new(34)]
    );
    let runnable: Vec<_> = selected
        .iter()
        .filter(|sdk| sdk.verify_supported("AllSdksTest").is_ok())
        .map(ToString::to_string)
        .collect();
    assert_eq!(runnable, vec!["SDK 28", "SDK 33"]);
}
