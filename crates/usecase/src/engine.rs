use ccwc_domain::{CountEntry, CountRequest, CountResult, counting};
use ccwc_ports::ContentResolver;
use ccwc_shared_kernel::Result;
use log::{debug, trace};

/// Computes every requested count against a single source.
pub struct CountContent<'a> {
    resolver: &'a mut dyn ContentResolver,
}

impl<'a> CountContent<'a> {
    pub fn new(resolver: &'a mut dyn ContentResolver) -> Self {
        Self { resolver }
    }

    /// Count `request` in order, one entry per requested kind.
    ///
    /// # Errors
    ///
    /// The first resolver or counting failure is returned as-is and no
    /// partial result is produced.
    pub fn run(&mut self, request: &CountRequest) -> Result<CountResult> {
        let kinds = request.effective();
        debug!("counting {kinds:?} from {}", self.resolver.source());

        let mut entries = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let content = self.resolver.resolve(kind)?;
            let value = counting::tally(kind, &content)?;
            trace!("{kind} = {value}");
            entries.push(CountEntry { kind, value });
        }

        Ok(CountResult::new(entries, self.resolver.source().label()))
    }
}

/// Shorthand for [`CountContent::run`].
///
/// # Errors
///
/// See [`CountContent::run`].
pub fn count(resolver: &mut dyn ContentResolver, request: &CountRequest) -> Result<CountResult> {
    CountContent::new(resolver).run(request)
}
