//! In-memory page rendered to the terminal.

use super::{Slot, Surface};

/// What an element is, which decides how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Container; renders as a heading.
    Section,
    /// Line of text, optionally prefixed with its caption.
    Text,
    /// Game-over result container with a nested label.
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub caption: String,
    pub text: String,
    /// Nested label; only result containers carry one
    pub label: Option<String>,
    pub visible: bool,
    pub parent: Option<String>,
}

impl Element {
    fn new(
        id: &str,
        kind: ElementKind,
        caption: &str,
        visible: bool,
        parent: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            caption: caption.to_string(),
            text: String::new(),
            label: None,
            visible,
            parent: parent.map(str::to_string),
        }
    }

    fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    fn with_label(mut self) -> Self {
        self.label = Some(String::new());
        self
    }
}

/// Ordered element tree with a change counter.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
    revision: u64,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            revision: 0,
        }
    }

    /// The game page: create/join forms, the game section, and one result
    /// container per question in the game-over section.
    ///
    /// Questions are element ids too, so a question that repeats another one
    /// or collides with a fixed element gets no result container.
    pub fn standard(questions: &[String]) -> Self {
        use ElementKind::{Result, Section, Text};

        let id = Slot::standard_element_id;
        let game = Some(id(Slot::GameSection));

        let mut elements = vec![
            Element::new(
                id(Slot::CreateForm),
                Section,
                "Create a game: /create [room]",
                true,
                None,
            ),
            Element::new(
                id(Slot::JoinForm),
                Section,
                "Join a game: /join <room>",
                true,
                None,
            ),
            Element::new(id(Slot::GameSection), Section, "Game", false, None),
            Element::new(id(Slot::RoomIdDisplay), Text, "Room", true, game),
            Element::new(id(Slot::ParticipantCount), Text, "Players", true, game),
            Element::new(
                id(Slot::AdminControls),
                Section,
                "You are the admin: /start when everybody is in",
                false,
                game,
            ),
            Element::new(id(Slot::LobbyText), Text, "", false, game)
                .with_text("Waiting for the admin to start the game..."),
            Element::new(id(Slot::CurrentQuestion), Text, "Question", true, game),
            Element::new(
                id(Slot::AnswerForm),
                Section,
                "Type your answer and press Enter",
                false,
                game,
            ),
            Element::new(id(Slot::WaitingIndicator), Text, "", false, game)
                .with_text("Waiting for the other players..."),
            Element::new(
                id(Slot::GameOverSection),
                Section,
                "Your folded story",
                false,
                None,
            ),
        ];

        for question in questions {
            if elements.iter().any(|e| e.id == *question) {
                tracing::warn!("Question '{}' clashes with an element id, skipped", question);
                continue;
            }
            elements.push(
                Element::new(
                    question,
                    Result,
                    question,
                    true,
                    Some(id(Slot::GameOverSection)),
                )
                .with_label(),
            );
        }

        Self::new(elements)
    }

    pub fn element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == element_id)
    }

    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.element(element_id).map(|e| e.text.as_str())
    }

    pub fn label(&self, element_id: &str) -> Option<&str> {
        self.element(element_id).and_then(|e| e.label.as_deref())
    }

    /// Whether the element and all of its ancestors are visible.
    pub fn is_visible(&self, element_id: &str) -> bool {
        let mut current = self.element(element_id);
        while let Some(element) = current {
            if !element.visible {
                return false;
            }
            current = element.parent.as_deref().and_then(|p| self.element(p));
        }
        self.element(element_id).is_some()
    }

    /// Incremented on every effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Render the visible part of the page, one element per line.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for element in self.elements.iter().filter(|e| self.is_visible(&e.id)) {
            match element.kind {
                ElementKind::Section => {
                    output.push_str(&format!("\n== {} ==\n", element.caption));
                }
                ElementKind::Text if element.caption.is_empty() => {
                    output.push_str(&format!("{}\n", element.text));
                }
                ElementKind::Text => {
                    output.push_str(&format!("{}: {}\n", element.caption, element.text));
                }
                ElementKind::Result => {
                    let label = element.label.as_deref().unwrap_or_default();
                    output.push_str(&format!("{} {}\n", element.caption, label));
                }
            }
        }
        output
    }

    fn element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == element_id)
    }

    /// Apply a change to one element; `apply` reports whether anything changed.
    ///
    /// Returns `false` when the element does not exist.
    fn update(&mut self, element_id: &str, apply: impl FnOnce(&mut Element) -> bool) -> bool {
        let Some(element) = self.element_mut(element_id) else {
            return false;
        };
        if apply(element) {
            self.revision += 1;
        }
        true
    }
}

impl Surface for Page {
    fn is_shown(&self, element_id: &str) -> bool {
        self.is_visible(element_id)
    }

    fn set_visible(&mut self, element_id: &str, visible: bool) -> bool {
        self.update(element_id, |e| {
            let changed = e.visible != visible;
            e.visible = visible;
            changed
        })
    }

    fn set_text(&mut self, element_id: &str, text: &str) -> bool {
        self.update(element_id, |e| {
            let changed = e.text != text;
            e.text = text.to_string();
            changed
        })
    }

    fn set_label(&mut self, element_id: &str, text: &str) -> bool {
        if self.label(element_id).is_none() {
            return false;
        }
        self.update(element_id, |e| {
            let changed = e.label.as_deref() != Some(text);
            e.label = Some(text.to_string());
            changed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<String> {
        vec!["Jaký?".to_string(), "Kdo?".to_string()]
    }

    #[test]
    fn test_standard_page_initial_visibility() {
        // テスト項目: 初期状態では作成・参加フォームのみが表示される
        // given (前提条件):
        let page = Page::standard(&questions());

        // when (操作):
        let create = page.is_visible("create-game-section");
        let join = page.is_visible("join-game-section");
        let game = page.is_visible("game-section");
        let question = page.is_visible("current-question-text");
        let result = page.is_visible("Jaký?");

        // then (期待する結果):
        assert!(create);
        assert!(join);
        assert!(!game);
        assert!(!question); // 親セクションが非表示
        assert!(!result);
    }

    #[test]
    fn test_set_label_only_on_result_containers() {
        // テスト項目: ネストしたラベルを持つ結果コンテナにだけ回答を書き込める
        // given (前提条件):
        let mut page = Page::standard(&questions());

        // when (操作):
        let on_result = page.set_label("Kdo?", "babička");
        let on_text = page.set_label("current-question-text", "babička");
        let on_missing = page.set_label("Proč?", "babička");

        // then (期待する結果):
        assert!(on_result);
        assert!(!on_text);
        assert!(!on_missing);
        assert_eq!(page.label("Kdo?"), Some("babička"));
        assert_eq!(page.label("Jaký?"), Some(""));
    }

    #[test]
    fn test_standard_page_skips_clashing_questions() {
        // テスト項目: 固定要素の id や重複と衝突する質問には結果コンテナを作らない
        // given (前提条件):
        let questions = vec![
            "gameID".to_string(),
            "Kdo?".to_string(),
            "Kdo?".to_string(),
        ];

        // when (操作):
        let mut page = Page::standard(&questions);

        // then (期待する結果):
        assert_eq!(page.element("gameID").map(|e| e.kind), Some(ElementKind::Text));
        assert_eq!(page.elements.iter().filter(|e| e.id == "Kdo?").count(), 1);
        assert!(!page.set_label("gameID", "babička"));
        assert!(page.set_label("Kdo?", "babička"));
    }

    #[test]
    fn test_revision_counts_effective_changes_only() {
        // テスト項目: 実際に変化した更新だけがリビジョンを進める
        // given (前提条件):
        let mut page = Page::standard(&questions());

        // when (操作):
        page.set_text("playersNum", "3");
        page.set_text("playersNum", "3");
        page.set_visible("create-game-section", true);

        // then (期待する結果):
        assert_eq!(page.revision(), 1);
    }

    #[test]
    fn test_missing_element_reports_false() {
        // テスト項目: 存在しない要素への操作は false を返す
        // given (前提条件):
        let mut page = Page::standard(&[]);

        // when (操作):
        let visible = page.set_visible("nope", true);
        let text = page.set_text("nope", "x");

        // then (期待する結果):
        assert!(!visible);
        assert!(!text);
        assert_eq!(page.revision(), 0);
    }

    #[test]
    fn test_render_shows_visible_elements() {
        // テスト項目: 表示中の要素だけが描画される
        // given (前提条件):
        let mut page = Page::standard(&questions());
        page.set_visible("create-game-section", false);
        page.set_visible("join-game-section", false);
        page.set_visible("game-section", true);
        page.set_text("gameID", "ABC123");
        page.set_text("playersNum", "2");
        page.set_text("current-question-text", "Jaký?");

        // when (操作):
        let output = page.render();

        // then (期待する結果):
        assert!(output.contains("== Game =="));
        assert!(output.contains("Room: ABC123"));
        assert!(output.contains("Players: 2"));
        assert!(output.contains("Question: Jaký?"));
        assert!(!output.contains("Create a game"));
        assert!(!output.contains("Waiting for the other players"));
        assert!(!output.contains("Your folded story"));
    }
}
