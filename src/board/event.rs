// SPDX-License-Identifier: MPL-2.0
//! Externally signaled events delivered to the board.
//!
//! Pointer and button events originate at the rendering collaborator's
//! host; permission outcomes originate at the OS bridge. The board is
//! the single consumer.

use crate::board::modal::ModalId;
use crate::notification::NotificationId;
use crate::system::PermissionOutcome;

/// An event delivered to [`crate::board::Board::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The pointer entered a notification panel (pauses its countdown).
    PointerEntered(NotificationId),
    /// The pointer left a notification panel (resumes its countdown).
    PointerLeft(NotificationId),
    /// The panel's close button was pressed.
    ClosePressed(NotificationId),
    /// A toast was pressed (user-dismiss trigger).
    ToastPressed(NotificationId),
    /// A modal's confirm button was pressed.
    ModalConfirmed(ModalId),
    /// The one-shot permission request resolved.
    PermissionResolved(PermissionOutcome),
}
