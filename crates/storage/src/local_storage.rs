use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;

use gazette_domain as domain;
use gazette_web_app::{Settings, log};

pub struct LocalStorage;

const KEY_SESSION: &str = "session";
const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

#[derive(serde::Serialize, serde::Deserialize)]
struct Session {
    username: String,
    role: String,
}

impl From<&domain::Session> for Session {
    fn from(value: &domain::Session) -> Self {
        Self {
            username: value.username.to_string(),
            role: value.role.to_string(),
        }
    }
}

impl TryFrom<Session> for domain::Session {
    type Error = domain::UsernameError;

    fn try_from(value: Session) -> Result<Self, Self::Error> {
        Ok(Self {
            username: domain::Username::new(&value.username)?,
            role: domain::Role::from(value.role.as_str()),
        })
    }
}

impl domain::SessionRepository for LocalStorage {
    fn read_session(&self) -> Result<Option<domain::Session>, domain::StorageError> {
        match gloo_storage::LocalStorage::get::<Session>(KEY_SESSION) {
            Ok(session) => domain::Session::try_from(session)
                .map(Some)
                .map_err(|err| domain::StorageError::Other(err.into())),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(domain::StorageError::Other(err.to_string().into())),
        }
    }

    fn write_session(&self, session: &domain::Session) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(KEY_SESSION, Session::from(session))
            .map_err(|err| domain::StorageError::Other(err.to_string().into()))
    }

    fn delete_session(&self) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::delete(KEY_SESSION);
        Ok(())
    }
}

impl gazette_web_app::SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        match gloo_storage::LocalStorage::get(KEY_SETTINGS) {
            Ok(settings) => Ok(settings),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(Settings::default()),
                err => Err(err),
            },
        }
        .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(100);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
