use anyhow::Result;

use super::super::{args::LookupCommand, exit_status::ExitStatus};
use super::context::AnnotationContext;
use crate::core::Lookup;

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let ctx = AnnotationContext::new(&cmd.common)?;

    match ctx.store.lookup(&cmd.key) {
        Some(value) if !value.is_empty() => {
            println!("{}", value);
            Ok(ExitStatus::Success)
        }
        _ => {
            let reason = match ctx.store.resolve_path(&cmd.key) {
                Lookup::Missing => "not found",
                Lookup::Node(_) => "is an empty group of keys",
                _ => "has no displayable value",
            };
            eprintln!("Key {} {}", cmd.key, reason);
            Ok(ExitStatus::Failure)
        }
    }
}
