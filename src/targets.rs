use std::path::{Path, PathBuf};

use strum::{AsRefStr, EnumIter};

static NODE_MODULES: &str = "node_modules";

/// Workspaces whose `node_modules` get removed, in deletion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Target {
    Shared,
    Backend,
    Frontend,
}

impl Target {
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.as_ref()).join(NODE_MODULES)
    }

    pub fn resolve(&self, anchor: &Path) -> PathBuf {
        anchor.join(self.relative_path())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_deletion_order() {
        assert_eq!(
            Target::iter().collect::<Vec<_>>(),
            vec![Target::Shared, Target::Backend, Target::Frontend]
        );
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            Target::iter()
                .map(|target| target.relative_path())
                .collect::<Vec<_>>(),
            vec![
                PathBuf::from("shared").join("node_modules"),
                PathBuf::from("backend").join("node_modules"),
                PathBuf::from("frontend").join("node_modules"),
            ]
        );
    }

    #[test]
    fn test_resolve() {
        let anchor = PathBuf::from("/srv/project");

        assert_eq!(
            Target::Backend.resolve(&anchor),
            anchor.join("backend").join("node_modules")
        );
    }
}
