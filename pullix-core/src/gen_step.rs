// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Typed step contract for caller-driven generators.

use pullix_error::SeqError;

/// The outcome a generator step must report, exactly one per invocation.
///
/// Earlier iterator designs let the generator callback signal through side
/// effects, which made "forgot to signal" indistinguishable from "no
/// progress" and needed a fatal illegal-state check at run time. Making the
/// signal the return type removes that failure mode entirely: a step cannot
/// return without choosing a variant.
#[derive(Debug)]
pub enum GenStep<T> {
    /// Produce `T` as the next element of the sequence.
    Emit(T),
    /// End the sequence normally.
    Complete,
    /// Abort the sequence; the error surfaces through the cursor's error
    /// channel on the pull that received it.
    Fail(SeqError),
}
