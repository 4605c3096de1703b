use cfg_aliases::cfg_aliases;

fn main() {
    cfg_aliases! {
        egl_backend: { all(feature = "egl", any(windows, unix), not(target_os = "macos"), not(target_os = "ios")) },
    }
}
