/// Feedback line shown under the claim view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NoticePosted { label: String, message: String },
    HintPosted { message: String },
    NoticeCleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    notice: Option<String>,
}

impl StatusBar {
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NoticePosted { label, message } => {
                let single_line = message.replace('\n', " ");
                self.notice = Some(format!("[{label}] {single_line}"));
            }
            Message::HintPosted { message } => {
                self.notice = Some(message);
            }
            Message::NoticeCleared => {
                self.notice = None;
            }
        }
    }
}
