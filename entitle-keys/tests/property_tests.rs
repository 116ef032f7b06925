mod common;

use common::{memory_service, platform};
use entitle_keys::{lifetime_license, PlatformPlanStore};
use entitle_types::{CreateTrialLicenseKeyRequest, PlatformPlanUpdate};
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn get_key_constant_for_any_input(key in proptest::option::of(".{0,64}")) {
        let (service, _) = memory_service();
        let license = runtime().block_on(service.get_key(key.as_deref())).unwrap();
        prop_assert_eq!(license.as_ref(), Some(lifetime_license()));
    }

    #[test]
    fn verify_constant_for_any_input(
        id in "[a-zA-Z0-9]{1,21}",
        key in proptest::option::of(".{0,64}"),
    ) {
        let (service, _) = memory_service();
        let license = runtime()
            .block_on(service.verify_key_or_return_null(&platform(&id), key.as_deref()))
            .unwrap();
        prop_assert_eq!(license.as_ref(), Some(lifetime_license()));
    }

    #[test]
    fn request_trial_constant_for_any_input(
        email in ".{0,64}",
        goal in proptest::option::of(".{0,32}"),
    ) {
        let (service, _) = memory_service();
        let request = CreateTrialLicenseKeyRequest { email, goal, ..Default::default() };
        let license = runtime().block_on(service.request_trial(&request)).unwrap();
        prop_assert_eq!(&license, lifetime_license());
    }

    #[test]
    fn apply_limits_constant_for_any_platform(id in "[a-zA-Z0-9_-]{1,21}") {
        let (service, store) = memory_service();
        let p = platform(&id);
        let rt = runtime();
        rt.block_on(service.apply_limits(&p, lifetime_license())).unwrap();
        let plan = rt.block_on(store.get(&p)).unwrap();
        prop_assert_eq!(plan, Some(PlatformPlanUpdate::enterprise(lifetime_license())));
    }
}
