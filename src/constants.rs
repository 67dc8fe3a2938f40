// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

/// The `title` attribute given to a `source_library` element if the caller
/// doesn't supply one.
pub const DEFAULT_LIBRARY_TITLE: &str = "sources";

/// The line written between the XML declaration and the `source_library`
/// element if the caller doesn't supply one.
pub const DEFAULT_LIBRARY_HEADER: &str = "\n";

/// The unit of the placeholder shell width.
pub const SHELL_WIDTH_UNIT: &str = "deg";
