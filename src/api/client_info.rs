use reqwest::Client;
use serde::Deserialize;
use std::env::consts::OS;
use std::time::Duration;

const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

#[derive(Deserialize, Debug)]
struct IpResponse {
    ip: String,
}

/// Looks up the public IP address of this machine.
///
/// Returns `None` on any failure; the attendance lookup proceeds without it.
pub async fn fetch_ip_address(client: &Client) -> Option<String> {
    let res = match client.get(IP_LOOKUP_URL).timeout(Duration::from_secs(5)).send().await {
        Ok(res) if res.status().is_success() => res,
        Ok(res) => {
            tracing::warn!(status = %res.status(), "failed to fetch IP address");
            return None;
        }
        Err(e) => {
            tracing::warn!("failed to fetch IP address: {}", e);
            return None;
        }
    };

    res.json::<IpResponse>().await.ok().map(|r| r.ip)
}

/// Human-readable label of the device the lookup runs on.
pub fn device_details() -> &'static str {
    device_label(OS)
}

pub fn device_label(os: &str) -> &'static str {
    match os {
        "windows" => "Windows Desktop",
        "macos" => "Apple Mac/Desktop",
        "ios" => "Apple iPhone/iPad",
        "android" => "Generic Android Mobile",
        "linux" | "freebsd" | "openbsd" | "netbsd" => "Linux Desktop",
        _ => "Unknown Device",
    }
}
