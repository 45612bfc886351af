pub mod export;
pub mod import;

use blib_core::{AssetKind, Embed, ExportPolicy};
use clap::ValueEnum;

/// Asset kind selector shared by the export and import commands
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    /// Cycles renderer materials
    CyclesMat,
    /// Node groups for Cycles renderer materials
    CyclesGrp,
}

impl From<KindArg> for AssetKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::CyclesMat => AssetKind::CyclesMaterial,
            KindArg::CyclesGrp => AssetKind::CyclesNodeGroup,
        }
    }
}

/// Conflict policy selector
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PolicyArg {
    Overwrite,
    Rename,
    Ignore,
}

impl From<PolicyArg> for ExportPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Overwrite => ExportPolicy::Overwrite,
            PolicyArg::Rename => ExportPolicy::Rename,
            PolicyArg::Ignore => ExportPolicy::Ignore,
        }
    }
}

/// Resource packing selector
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EmbedArg {
    /// Pack into the host file
    Always,
    /// Store externally
    Never,
    /// Maintain the setup from the exported asset
    Preserve,
}

impl From<EmbedArg> for Embed {
    fn from(arg: EmbedArg) -> Self {
        match arg {
            EmbedArg::Always => Embed::Always,
            EmbedArg::Never => Embed::Never,
            EmbedArg::Preserve => Embed::Preserve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_arg_maps_to_asset_kind() {
        assert_eq!(AssetKind::from(KindArg::CyclesMat), AssetKind::CyclesMaterial);
        assert_eq!(AssetKind::from(KindArg::CyclesGrp), AssetKind::CyclesNodeGroup);
    }

    #[test]
    fn policy_arg_maps_to_export_policy() {
        assert_eq!(ExportPolicy::from(PolicyArg::Rename), ExportPolicy::Rename);
        assert_eq!(ExportPolicy::from(PolicyArg::Ignore), ExportPolicy::Ignore);
    }
}
