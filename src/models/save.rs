use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// Serialization format used for save files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMethod {
    #[default]
    Json,
    Cbor,
}

impl fmt::Display for SaveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveMethod::Json => write!(f, "JSON"),
            SaveMethod::Cbor => write!(f, "CBOR"),
        }
    }
}

/// Save file addressing: slot `N` lives at `<save_dir>/slot<N>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlots {
    save_dir: Utf8PathBuf,
    method: SaveMethod,
}

impl SaveSlots {
    pub fn new<P: AsRef<Utf8Path>>(save_dir: P, method: SaveMethod) -> Self {
        Self {
            save_dir: save_dir.as_ref().to_path_buf(),
            method,
        }
    }

    pub fn slot_path(&self, slot: u32) -> Utf8PathBuf {
        self.save_dir.join(format!("slot{}", slot))
    }

    pub fn method(&self) -> SaveMethod {
        self.method
    }

    pub fn save_dir(&self) -> &Utf8Path {
        &self.save_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_path() {
        let slots = SaveSlots::new("/home/player/.tuxemon/saves", SaveMethod::default());
        assert_eq!(
            slots.slot_path(3),
            Utf8PathBuf::from("/home/player/.tuxemon/saves/slot3")
        );
        assert_eq!(slots.method(), SaveMethod::Json);
    }

    #[test]
    fn test_save_method_display() {
        assert_eq!(SaveMethod::Json.to_string(), "JSON");
        assert_eq!(SaveMethod::Cbor.to_string(), "CBOR");
    }
}
