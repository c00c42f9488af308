/*!
 * # Editing Core
 *
 * The editor works on the same ordered sequence of entries that the
 * renderer reads.
 *
 * ## Mutation protocol
 *
 * - Every edit is a **`BlockCmd`** (insert, move, delete, update data)
 * - Applying a command yields the **complete replacement sequence**; there
 *   is no partial-update protocol
 * - Commands never fail: out-of-range indexes and tag-changing payload
 *   updates leave the sequence untouched
 *
 * ## Identity
 *
 * - Blocks get a UUID when inserted and keep it for life
 * - A block's tag is fixed at creation; `UpdateData` must carry a payload
 *   of the same tag
 *
 * ## Module Structure
 *
 * - **`commands`**: `BlockCmd` and the pure sequence operations
 * - **`document`**: `BlockDocument` session with version and dirty tracking
 * - **`fields`**: payload helpers for the per-tag sub-editors
 * - **`upload`**: matching finished uploads back to their block
 * - **`patch`**: edit result
 */

pub mod commands;
pub mod document;
pub mod fields;
pub mod patch;
pub mod upload;

pub use commands::{BlockCmd, Direction};
pub use document::BlockDocument;
pub use patch::Patch;
pub use upload::{UploadOutcome, UploadSlot, complete_upload};
