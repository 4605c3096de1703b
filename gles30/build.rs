use cfg_aliases::cfg_aliases;

fn main() {
    cfg_aliases! {
        // Systems.
        android_platform: { target_os = "android" },
        macos_platform: { target_os = "macos" },
        ios_platform: { target_os = "ios" },
        apple_platform: { any(ios_platform, macos_platform) },
        windows_platform: { target_os = "windows" },
        free_unix: { all(unix, not(apple_platform), not(android_platform)) },
    }
}
