use serde::Serialize;
use std::fs::{self, File};

use log::{debug, warn};
use rmp_serde::Serializer;
use serde::de::DeserializeOwned;

use crate::errors::IoError;
use crate::utils::{create_directories_if_needed, file_exists};

/* This trait allow us to persist data by serializing and deserializing MessagePack files.
Each manager is an explicit handle on its own file: whoever needs the data receives the manager. */
pub trait Persistable: Serialize + DeserializeOwned {
    /* File name inside the data directory */
    const FILE_NAME: &'static str;

    fn new(path: Option<String>) -> Result<Self, IoError>
    where
        Self: Sized,
    {
        let path = path.unwrap_or(format!(".data/{}", Self::FILE_NAME));
        return Self::_new(path, true);
    }

    fn in_dir(data_dir: &str) -> Result<Self, IoError>
    where
        Self: Sized,
    {
        return Self::new(Some(format!("{}/{}", data_dir.trim_end_matches('/'), Self::FILE_NAME)));
    }

    fn new_non_persistent() -> Result<Self, IoError>
    where
        Self: Sized,
    {
        return Ok(Self::default_new(String::new(), false));
    }

    fn _new(path: String, persist: bool) -> Result<Self, IoError>
    where
        Self: Sized,
    {
        if !file_exists(&path) {
            debug!("No data at {path}, starting empty");
            return Ok(Self::default_new(path, persist));
        }
        let file = File::open(&path).map_err(|e| IoError::new(&path, e.to_string()))?;
        let mut deserialized: Self =
            rmp_serde::from_read(file).map_err(|e| IoError::new(&path, e.to_string()))?;
        deserialized.restore(path, persist);
        Ok(deserialized)
    }

    fn save(&self) -> Result<(), IoError> {
        let path = self.get_path();
        create_directories_if_needed(path).map_err(|e| IoError::new(path, e.to_string()))?;
        let file = File::create(path).map_err(|e| IoError::new(path, e.to_string()))?;
        let mut writer = Serializer::new(file);
        self.serialize(&mut writer)
            .map_err(|e| IoError::new(path, e.to_string()))?;
        debug!("Saved {path}");
        Ok(())
    }

    fn delete(&self) -> Result<(), IoError> {
        let path = self.get_path();
        if file_exists(path) {
            fs::remove_file(path).map_err(|e| IoError::new(path, e.to_string()))?;
        }
        Ok(())
    }

    /* Called from the Drop implementations */
    fn save_on_drop(&self) {
        if !self.is_persistent() {
            return;
        }
        if let Err(e) = self.save() {
            warn!("Could not save data on drop: {e}");
        }
    }

    /* Get the saved path */
    fn get_path(&self) -> &str;

    /* default value (new value): for instance Vec::new() */
    fn default_new(path: String, persist: bool) -> Self;

    /* Set back what is not serialized (location, indexes) after loading from a file */
    fn restore(&mut self, path: String, persist: bool);

    /* Decide if it has to persist or not. This is used in drop trait */
    fn is_persistent(&self) -> bool;
}

/* Outcome of inserting a batch of records in a manager */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertReport {
    pub inserted: usize,
    pub duplicates: usize,
}

impl InsertReport {
    pub fn add(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.duplicates += 1;
        }
    }
}
