use sovran_keyedstore::{KeyedLookup, KeyedStore, Loadable, SettingKey, Settings, StoreError};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppSettingsBool {
    IsUserLoggedIn,
    IsAllCached,
    HasFirstSetupFinished,
}

impl SettingKey for AppSettingsBool {
    const ALL: &'static [Self] = &[
        Self::IsUserLoggedIn,
        Self::IsAllCached,
        Self::HasFirstSetupFinished,
    ];

    fn raw_key(&self) -> &'static str {
        match self {
            Self::IsUserLoggedIn => "isUserLoggedIn",
            Self::IsAllCached => "isAllCached",
            Self::HasFirstSetupFinished => "hasFirstSetupFinished",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppSettingsString {
    UserName,
    UserPassword,
}

impl SettingKey for AppSettingsString {
    const ALL: &'static [Self] = &[Self::UserName, Self::UserPassword];

    fn raw_key(&self) -> &'static str {
        match self {
            Self::UserName => "userName",
            Self::UserPassword => "userPassword",
        }
    }
}

const DEFAULTS: &str = r#"
isUserLoggedIn = false
userName = "guest"
launchCount = 0
"#;

/// Demonstrates typed, enum-keyed access to untyped settings
fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut settings = Settings::load_from_str(DEFAULTS)?;

    // Stringly typed access works, but a typo silently reads as false
    settings.set("FooBar", true);
    println!("BarFoo: {}", settings.flag("BarFoo"));

    // The typed views only accept their own keys and value type
    let mut flags = settings.typed::<AppSettingsBool, bool>();
    flags.set(true, AppSettingsBool::IsAllCached);
    flags.set(true, AppSettingsBool::HasFirstSetupFinished);
    println!("Flags set: {:?}", flags.all_keys());
    println!("isAllCached: {:?}", flags.item(&AppSettingsBool::IsAllCached));

    let mut strings = settings.typed::<AppSettingsString, String>();
    strings.set("Thomas".to_string(), AppSettingsString::UserName);
    strings.set("blah".to_string(), AppSettingsString::UserPassword);
    println!("userName: {:?}", strings.item(&AppSettingsString::UserName));

    // Reading a value back as the wrong type is an error
    match settings.value::<String>("launchCount") {
        Ok(value) => println!("launchCount: {:?}", value),
        Err(StoreError::TypeMismatch { key, expected }) => {
            println!("{} is not a {}", key, expected)
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    println!("Settings hold {} values", settings.len());

    Ok(())
}
