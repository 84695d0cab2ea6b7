use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Region used when neither the caller nor the environment provides one.
const FALLBACK_REGION: &str = "us-east-1";

/// Resolve the SDK configuration from the default credential chain, with an
/// optional named profile and an optional explicit region.
pub async fn sdk_config(profile: Option<&str>, region: Option<&str>) -> SdkConfig {
    let region_provider = match region {
        Some(region) => RegionProviderChain::first_try(Region::new(region.to_string()))
            .or_default_provider()
            .or_else(Region::new(FALLBACK_REGION)),
        None => RegionProviderChain::default_provider().or_else(Region::new(FALLBACK_REGION)),
    };

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}

/// Cost Explorer is a global API; the region comes from the environment or
/// falls back to us-east-1.
pub async fn cost_explorer_client(profile: Option<&str>) -> aws_sdk_costexplorer::Client {
    aws_sdk_costexplorer::Client::new(&sdk_config(profile, None).await)
}

pub async fn cloudwatch_client(profile: Option<&str>, region: &str) -> aws_sdk_cloudwatch::Client {
    aws_sdk_cloudwatch::Client::new(&sdk_config(profile, Some(region)).await)
}
