//! Grouped status notification composition

use crate::descriptor::{
    BodyStyle, NotificationDescriptor, SummaryNotification, GROUP_INSTALL_STATUS,
};
use crate::id::{ItemIdSequence, NotificationId};
use crate::NotificationSink;
use instq_types::{InstallOutcome, OutcomeKind};

const SUCCESS_TITLE: &str = "Install complete";
const ERROR_TITLE: &str = "Install failed";

/// Build the title/body descriptor for a classified outcome.
///
/// `Invalid` and `Encrypted` messages may exceed single-line display and get
/// the expandable body variant; every other kind renders plain.
#[must_use]
pub fn compose(outcome: &InstallOutcome) -> NotificationDescriptor {
    let title = if outcome.kind.is_success() {
        SUCCESS_TITLE
    } else {
        ERROR_TITLE
    };
    let style = match outcome.kind {
        OutcomeKind::Invalid | OutcomeKind::Encrypted => BodyStyle::BigText,
        _ => BodyStyle::Plain,
    };
    NotificationDescriptor {
        title: title.to_string(),
        body: outcome.message.clone(),
        style,
        group: GROUP_INSTALL_STATUS.to_string(),
        kind: outcome.kind,
    }
}

/// Posts grouped per-item notifications built from classified outcomes.
///
/// One composer is owned by one job; the item id sequence advances with
/// every posted outcome and is never shared across jobs.
#[derive(Debug)]
pub struct StatusComposer<S> {
    sink: S,
    ids: ItemIdSequence,
    summary: SummaryNotification,
}

impl<S: NotificationSink> StatusComposer<S> {
    /// Create a composer posting into `sink` under the given batch title
    pub fn new(sink: S, batch_title: impl Into<String>) -> Self {
        Self {
            sink,
            ids: ItemIdSequence::new(),
            summary: SummaryNotification::new(batch_title),
        }
    }

    /// Post the per-item notification for `outcome` together with the group
    /// summary, returning the item's allocated id.
    ///
    /// The summary must accompany every item post - grouped notifications
    /// only render while the summary is present - so the two posts form one
    /// atomic operation and are never issued independently.
    pub fn notify(&mut self, outcome: &InstallOutcome) -> NotificationId {
        self.sink
            .post_summary(NotificationId::SUMMARY, &self.summary);
        let id = self.ids.next_id();
        self.sink.post_status(id, &compose(outcome));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(kind: OutcomeKind) -> InstallOutcome {
        InstallOutcome::new("game.pkg", kind, "some message about game.pkg")
    }

    #[test]
    fn success_uses_distinct_title_and_plain_body() {
        let d = compose(&outcome(OutcomeKind::Success));
        assert_eq!(d.title, SUCCESS_TITLE);
        assert_eq!(d.style, BodyStyle::Plain);
        assert_eq!(d.group, GROUP_INSTALL_STATUS);
    }

    #[test]
    fn invalid_and_encrypted_get_expandable_bodies() {
        for kind in [OutcomeKind::Invalid, OutcomeKind::Encrypted] {
            let d = compose(&outcome(kind));
            assert_eq!(d.title, ERROR_TITLE);
            assert_eq!(d.style, BodyStyle::BigText);
        }
    }

    #[test]
    fn remaining_error_kinds_collapse_to_plain_error_presentation() {
        for kind in [
            OutcomeKind::FailedToOpenFile,
            OutcomeKind::FileNotFound,
            OutcomeKind::Aborted,
            OutcomeKind::Unknown,
        ] {
            let d = compose(&outcome(kind));
            assert_eq!(d.title, ERROR_TITLE);
            assert_eq!(d.style, BodyStyle::Plain);
        }
    }
}
