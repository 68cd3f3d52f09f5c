// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::collection::{FontCollection, FontFace, FontFamily, QueryStatus};
use crate::{MemoryCollection, MemoryFace};
use core::cell::RefCell;

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum Call {
    FindFamily(String),
    ScanFaces,
}

/// Memory collection that records the lookups made against it.
#[derive(Default, Debug)]
pub(crate) struct RecordingCollection {
    fonts: MemoryCollection,
    calls: RefCell<Vec<Call>>,
}

impl RecordingCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_face(mut self, face: MemoryFace) -> Self {
        self.fonts.add_face(face);
        self
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        self.calls.take()
    }

    pub(crate) fn position(&self, call: &Call) -> Option<usize> {
        self.calls.borrow().iter().position(|c| c == call)
    }
}

impl FontCollection for RecordingCollection {
    fn find_family(&self, name: &str) -> Option<&dyn FontFamily> {
        self.calls
            .borrow_mut()
            .push(Call::FindFamily(name.to_owned()));
        self.fonts.find_family(name)
    }

    fn scan_faces(&self, f: &mut dyn FnMut(&dyn FontFace) -> QueryStatus) {
        self.calls.borrow_mut().push(Call::ScanFaces);
        self.fonts.scan_faces(f);
    }
}
