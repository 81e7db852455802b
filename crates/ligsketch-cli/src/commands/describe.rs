use super::print_json;
use crate::cli::DescribeArgs;
use crate::error::Result;
use ligsketch::core::chem::descriptors::MolecularDescriptors;
use tracing::info;

pub async fn run(args: DescribeArgs) -> Result<()> {
    info!("Computing descriptors for '{}'.", args.formula);
    print_json(&MolecularDescriptors::from_formula(&args.formula))
}
