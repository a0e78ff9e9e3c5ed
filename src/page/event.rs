/// Events the controller reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Click { target: String },
    /// `target` lost focus to `related`, or to nothing
    Blur {
        target: String,
        related: Option<String>,
    },
    /// The checked state or value of `target` changed
    Change { target: String },
    Submit { form: String },
}

impl PageEvent {
    pub fn click(target: &str) -> Self {
        Self::Click {
            target: target.to_owned(),
        }
    }

    pub fn blur(target: &str, related: Option<&str>) -> Self {
        Self::Blur {
            target: target.to_owned(),
            related: related.map(str::to_owned),
        }
    }

    pub fn change(target: &str) -> Self {
        Self::Change {
            target: target.to_owned(),
        }
    }

    pub fn submit(form: &str) -> Self {
        Self::Submit {
            form: form.to_owned(),
        }
    }
}
