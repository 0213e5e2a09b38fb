use acad_core::enums::{AcademicLevel, City, DurationBucket, Modality};
use acad_search::{FilterState, GroupSelection};

use crate::cli::root_commands::SearchArgs;

/// Build the filter state from `academia search` flags.
pub fn filter_state(args: &SearchArgs) -> anyhow::Result<FilterState> {
    let mut state = FilterState::with_term(args.term.clone().unwrap_or_default());
    check::<Modality>(&mut state, &args.modality)?;
    check::<DurationBucket>(&mut state, &args.duration)?;
    check::<AcademicLevel>(&mut state, &args.level)?;
    check::<City>(&mut state, &args.city)?;
    Ok(state)
}

fn check<O: GroupSelection>(
    state: &mut FilterState,
    raw: &[String],
) -> anyhow::Result<()> {
    for value in raw {
        state.toggle(O::parse(value)?, true);
    }
    Ok(())
}
