// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Types for source models and source libraries.

mod library;
mod model;
mod parameter;
mod source;
mod spatial;
mod spectral;

pub use library::*;
pub use model::*;
pub use parameter::*;
pub use source::*;
pub use spatial::*;
pub use spectral::*;
