/// Poster resolution state machine
///
/// Each movie card owns one `PosterResolver`. It holds the merged candidate
/// source list and walks it in response to load-outcome events: failed loads
/// are retried against the same source up to `max_retries` times, then the
/// resolver advances to the next candidate, and once the last candidate is
/// exhausted it parks in the terminal `Failed` state (the card then shows
/// the fallback panel instead of an image).
///
/// The machine is pure state - it never performs I/O itself. The app's
/// update loop feeds it outcomes from `poster::loader` and spawns the next
/// load attempt based on the returned `ErrorOutcome`.

use crate::poster::placeholder::PLACEHOLDER_SOURCE;

/// Default number of same-source reload attempts before advancing
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Where the resolver currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Attempting to load `candidates[index]`; `retries` counts the
    /// reload attempts made against that index so far
    Attempting { index: usize, retries: u32 },
    /// Every candidate exhausted; terminal for the current candidate list
    Failed,
}

/// What the update loop should do after feeding an error to the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOutcome {
    /// Re-issue a (cache-busted) load of the same candidate
    Retry,
    /// Load the next candidate in the list
    Advance,
    /// Nothing left to try; the fallback panel is now shown
    Exhausted,
}

/// Identifies one in-flight load attempt
///
/// A completed load is only applied if its tag still matches the resolver's
/// current attempt. Results from a superseded attempt (the resolver retried,
/// advanced, or was re-derived while the load was in flight) are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptTag {
    /// Which derivation of the candidate list this attempt belongs to
    pub generation: u64,
    /// Candidate index being attempted
    pub index: usize,
    /// Retry count at the time the attempt was spawned
    pub retries: u32,
}

/// The per-card resolution state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterResolver {
    /// Merged, deduplicated, ordered candidate sources (never empty)
    candidates: Vec<String>,
    resolution: Resolution,
    max_retries: u32,
    /// Bumped whenever the candidate list is re-derived, so in-flight
    /// results from the previous list can be recognized and dropped
    generation: u64,
}

impl PosterResolver {
    /// Create a resolver from the three source channels.
    ///
    /// Channels are merged in priority order: the explicit override list
    /// first, then the primary source, then the legacy alias. Blank entries
    /// are filtered and duplicates removed before the merge; an empty result
    /// is replaced with the built-in placeholder.
    pub fn new(
        sources: &[String],
        poster: Option<&str>,
        image_url: Option<&str>,
        max_retries: u32,
    ) -> Self {
        Self {
            candidates: derive_candidates(sources, poster, image_url),
            resolution: Resolution::Attempting { index: 0, retries: 0 },
            max_retries,
            generation: 0,
        }
    }

    /// The merged candidate list (always at least one entry)
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The source currently being attempted, or None once failed
    pub fn current_source(&self) -> Option<&str> {
        match self.resolution {
            Resolution::Attempting { index, .. } => Some(self.candidates[index].as_str()),
            Resolution::Failed => None,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn is_failed(&self) -> bool {
        self.resolution == Resolution::Failed
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Tag for the attempt that should be in flight right now,
    /// or None once the resolver has failed
    pub fn attempt(&self) -> Option<AttemptTag> {
        match self.resolution {
            Resolution::Attempting { index, retries } => Some(AttemptTag {
                generation: self.generation,
                index,
                retries,
            }),
            Resolution::Failed => None,
        }
    }

    /// Whether a completed load with this tag still belongs to the
    /// current attempt
    pub fn accepts(&self, tag: AttemptTag) -> bool {
        self.attempt() == Some(tag)
    }

    /// Feed a load failure for the current attempt into the machine.
    ///
    /// Runs the retry/advance algorithm:
    /// 1. retries remaining and not on the placeholder: bump the retry
    ///    count and request the same candidate again
    /// 2. more candidates left: reset the retry count and advance
    /// 3. otherwise: park in `Failed`
    ///
    /// The built-in placeholder is never retried, so a resolver whose only
    /// candidate is the placeholder fails on the first error instead of
    /// looping on an artifact we generated ourselves.
    pub fn on_error(&mut self) -> ErrorOutcome {
        let (index, retries) = match self.resolution {
            Resolution::Attempting { index, retries } => (index, retries),
            Resolution::Failed => return ErrorOutcome::Exhausted,
        };

        let on_placeholder = self.candidates[index] == PLACEHOLDER_SOURCE;

        if retries < self.max_retries && !on_placeholder {
            self.resolution = Resolution::Attempting {
                index,
                retries: retries + 1,
            };
            ErrorOutcome::Retry
        } else if index + 1 < self.candidates.len() {
            self.resolution = Resolution::Attempting {
                index: index + 1,
                retries: 0,
            };
            ErrorOutcome::Advance
        } else {
            self.resolution = Resolution::Failed;
            ErrorOutcome::Exhausted
        }
    }

    /// Re-derive the candidate list from changed source inputs.
    ///
    /// Resolution state is keyed to the derived list's identity: if the new
    /// inputs produce the same list, in-progress state is kept untouched.
    /// If the list differs, all progress is discarded, the machine restarts
    /// at the first candidate, and the generation is bumped so results from
    /// loads spawned against the old list are dropped.
    ///
    /// Returns true if the list changed (the caller should spawn a fresh
    /// load for the new first candidate).
    pub fn set_sources(
        &mut self,
        sources: &[String],
        poster: Option<&str>,
        image_url: Option<&str>,
    ) -> bool {
        let candidates = derive_candidates(sources, poster, image_url);
        if candidates == self.candidates {
            return false;
        }

        self.candidates = candidates;
        self.resolution = Resolution::Attempting { index: 0, retries: 0 };
        self.generation += 1;
        true
    }
}

/// Merge the three source channels into one ordered candidate list.
///
/// Precedence is a plain ordered concatenation: override list entries in
/// order, then the primary source, then the legacy alias. Entries that are
/// empty or whitespace-only are treated as absent; duplicates keep their
/// first position. If nothing survives, the built-in placeholder stands in
/// so the resolver always has something to attempt.
pub fn derive_candidates(
    sources: &[String],
    poster: Option<&str>,
    image_url: Option<&str>,
) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    let merged = sources
        .iter()
        .map(String::as_str)
        .chain(poster)
        .chain(image_url);

    for source in merged {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !candidates.iter().any(|c| c == trimmed) {
            candidates.push(trimmed.to_string());
        }
    }

    if candidates.is_empty() {
        candidates.push(PLACEHOLDER_SOURCE.to_string());
    }

    candidates
}
