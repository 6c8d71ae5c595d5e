use crate::{ThisError, ids::DialogId, log, log::Topic, model::HostRecord};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// DialogError
///

#[derive(Debug, ThisError)]
pub enum DialogError {
    #[error("dialog '{dialog}' does not accept a {found} payload")]
    PayloadMismatch {
        dialog: DialogId,
        found: &'static str,
    },
}

///
/// DialogPayload
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DialogPayload {
    Host { host_id: String, hostname: String },
    EditHost { host: HostRecord },
    Flag,
}

impl DialogPayload {
    #[must_use]
    pub fn for_host(host: &HostRecord) -> Self {
        Self::Host {
            host_id: host.id.clone(),
            hostname: host.hostname().to_string(),
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Host { .. } => "host",
            Self::EditHost { .. } => "edit-host",
            Self::Flag => "flag",
        }
    }

    const fn fits(&self, dialog: DialogId) -> bool {
        matches!(
            (dialog, self),
            (
                DialogId::Events | DialogId::DeleteHost | DialogId::ResetHost,
                Self::Host { .. }
            ) | (DialogId::EditHost, Self::EditHost { .. })
                | (DialogId::AdditionalNtpSources, Self::Flag)
        )
    }
}

///
/// DialogRegistry
///
/// Which host dialogs are open and with what payload. Mutated only through
/// `open` and `close`.
///

#[derive(Clone, Debug, Default)]
pub struct DialogRegistry {
    open: BTreeMap<DialogId, DialogPayload>,
}

impl DialogRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `dialog`, replacing any payload it was already showing.
    pub fn open(&mut self, dialog: DialogId, payload: DialogPayload) -> Result<(), DialogError> {
        if !payload.fits(dialog) {
            return Err(DialogError::PayloadMismatch {
                dialog,
                found: payload.kind(),
            });
        }

        log!(Topic::Dialog, Debug, "open {dialog}");
        self.open.insert(dialog, payload);

        Ok(())
    }

    /// Close `dialog`, returning the payload it held.
    pub fn close(&mut self, dialog: DialogId) -> Option<DialogPayload> {
        let closed = self.open.remove(&dialog);
        if closed.is_some() {
            log!(Topic::Dialog, Debug, "close {dialog}");
        }

        closed
    }

    #[must_use]
    pub fn get(&self, dialog: DialogId) -> Option<&DialogPayload> {
        self.open.get(&dialog)
    }

    #[must_use]
    pub fn is_open(&self, dialog: DialogId) -> bool {
        self.open.contains_key(&dialog)
    }

    pub fn open_dialogs(&self) -> impl Iterator<Item = DialogId> + '_ {
        self.open.keys().copied()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::HostStatus, test::support::host};

    #[test]
    fn open_and_close_round_trip() {
        let h = host("h-1", HostStatus::Known, None);
        let mut dialogs = DialogRegistry::new();

        dialogs
            .open(DialogId::Events, DialogPayload::for_host(&h))
            .unwrap();
        dialogs
            .open(DialogId::AdditionalNtpSources, DialogPayload::Flag)
            .unwrap();

        assert!(dialogs.is_open(DialogId::Events));
        assert_eq!(
            dialogs.open_dialogs().collect::<Vec<_>>(),
            vec![DialogId::AdditionalNtpSources, DialogId::Events]
        );

        let closed = dialogs.close(DialogId::Events).unwrap();
        assert_eq!(
            closed,
            DialogPayload::Host {
                host_id: "h-1".into(),
                hostname: "h-1".into()
            }
        );
        assert!(!dialogs.is_open(DialogId::Events));
        assert!(dialogs.close(DialogId::Events).is_none());
    }

    #[test]
    fn reopening_replaces_payload() {
        let mut dialogs = DialogRegistry::new();
        let a = host("a", HostStatus::Known, None);
        let b = host("b", HostStatus::Known, None);

        dialogs
            .open(DialogId::EditHost, DialogPayload::EditHost { host: a })
            .unwrap();
        dialogs
            .open(DialogId::EditHost, DialogPayload::EditHost { host: b })
            .unwrap();

        match dialogs.get(DialogId::EditHost) {
            Some(DialogPayload::EditHost { host }) => assert_eq!(host.id, "b"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let mut dialogs = DialogRegistry::new();

        let err = dialogs
            .open(DialogId::DeleteHost, DialogPayload::Flag)
            .unwrap_err();

        assert!(err.to_string().contains("delete-host"));
        assert!(!dialogs.is_open(DialogId::DeleteHost));
    }
}
