//! Test helpers for writing datasets into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two named POIs with opposite risk profiles plus one bare landmark.
///
/// Carries an extra `description` field and a misspelt popularity label to
/// mirror hand-edited datasets.
pub(super) const SAMPLE_DATASET: &str = r#"{
  "named_pois": [
    {
      "id": "hot_city",
      "name": "Hot City",
      "type": "named_poi",
      "description": "Busiest drop on the map",
      "rotation_data": { "center_distance": "very_close" },
      "mobility": { "launch_pads": 1, "vehicles": ["car"] },
      "loot": { "chests": 30, "rare_chests": 6, "ammo_boxes": 20 },
      "shields": { "slurp_trucks": 1, "vending_machines": 2 },
      "contest_data": { "popularity": "very_high", "offspawn_fight_likelihood": "95%" }
    },
    {
      "id": "quiet_farm",
      "name": "Quiet Farm",
      "type": "named_poi",
      "rotation_data": { "center_distance": "close" },
      "materials": { "wood": 9, "brick": 4, "metal": 2 },
      "contest_data": { "popularity": "very_low", "offspawn_fight_likelihood": "5%" }
    }
  ],
  "landmarks": [
    {
      "id": "lonely_shack",
      "name": "Lonely Shack",
      "type": "landmark",
      "contest_data": { "popularity": "meh" }
    }
  ]
}"#;

/// A temporary directory that lives as long as the test.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write [`SAMPLE_DATASET`] and return its path.
    pub(super) fn sample_dataset(&self) -> Utf8PathBuf {
        let path = self.path("poi_dataset.json");
        write_utf8(&path, SAMPLE_DATASET.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Render captured stdout as a string.
pub(super) fn captured(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("stdout utf-8")
}
