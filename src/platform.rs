use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const FROZEN_ENV: &str = "SWEEPER_FROZEN";

// Read once, at first use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    pub platform: String,
    pub packaged: bool,
    pub right_btn_num: u8,
    pub base_path: Option<PathBuf>,
}

impl Environment {
    fn probe() -> Self {
        let platform = platform_name().to_string();
        let right_btn_num = right_btn_num(&platform);
        Self {
            platform,
            packaged: packaged_from(env::var_os(FROZEN_ENV)),
            right_btn_num,
            base_path: base_path(),
        }
    }
}

static ENVIRONMENT: LazyLock<Environment> = LazyLock::new(Environment::probe);

pub fn environment() -> &'static Environment {
    &ENVIRONMENT
}

pub fn platform_name() -> &'static str {
    match env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

// Macs report right-click as button 2.
pub fn right_btn_num(platform: &str) -> u8 {
    if platform == "darwin" { 2 } else { 3 }
}

pub fn packaged_from(flag: Option<OsString>) -> bool {
    flag.is_some()
}

// None only when the cwd itself can't be read.
pub fn base_path() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    Some(parent_or_self(&cwd))
}

// The root is its own parent.
fn parent_or_self(path: &Path) -> PathBuf {
    path.parent().unwrap_or(path).to_path_buf()
}
