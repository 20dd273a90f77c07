/// Window metadata the floating rules are matched against.
#[derive(Debug, Clone, Default)]
pub struct WindowProps {
    pub wm_class: Vec<String>,
    pub title: Option<String>,
    pub wm_type: Option<String>,
    pub fixed_size: bool,
    pub fixed_ratio: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPredicate {
    FixedSize,
    FixedRatio,
}

impl WindowPredicate {
    fn holds(self, props: &WindowProps) -> bool {
        match self {
            WindowPredicate::FixedSize => props.fixed_size,
            WindowPredicate::FixedRatio => props.fixed_ratio,
        }
    }
}

/// Every criterion that is set must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    pub wm_class: Option<&'static str>,
    pub title: Option<&'static str>,
    pub wm_type: Option<&'static str>,
    pub predicate: Option<WindowPredicate>,
}

impl Match {
    pub const fn wm_class(class: &'static str) -> Self {
        Match {
            wm_class: Some(class),
            title: None,
            wm_type: None,
            predicate: None,
        }
    }

    pub const fn title(title: &'static str) -> Self {
        Match {
            wm_class: None,
            title: Some(title),
            wm_type: None,
            predicate: None,
        }
    }

    pub const fn wm_type(wm_type: &'static str) -> Self {
        Match {
            wm_class: None,
            title: None,
            wm_type: Some(wm_type),
            predicate: None,
        }
    }

    pub const fn predicate(predicate: WindowPredicate) -> Self {
        Match {
            wm_class: None,
            title: None,
            wm_type: None,
            predicate: Some(predicate),
        }
    }

    pub fn matches(&self, props: &WindowProps) -> bool {
        let class_ok = self
            .wm_class
            .is_none_or(|class| props.wm_class.iter().any(|c| c == class));
        let title_ok = self
            .title
            .is_none_or(|title| props.title.as_deref() == Some(title));
        let type_ok = self
            .wm_type
            .is_none_or(|wm_type| props.wm_type.as_deref() == Some(wm_type));
        let predicate_ok = self.predicate.is_none_or(|p| p.holds(props));

        class_ok && title_ok && type_ok && predicate_ok
    }
}

const DEFAULT_FLOAT_RULES: &[Match] = &[
    Match::wm_type("utility"),
    Match::wm_type("notification"),
    Match::wm_type("toolbar"),
    Match::wm_type("splash"),
    Match::wm_type("dialog"),
    Match::wm_class("file_progress"),
    Match::wm_class("confirm"),
    Match::wm_class("dialog"),
    Match::wm_class("download"),
    Match::wm_class("error"),
    Match::wm_class("notification"),
    Match::wm_class("splash"),
    Match::wm_class("toolbar"),
    Match::predicate(WindowPredicate::FixedSize),
    Match::predicate(WindowPredicate::FixedRatio),
];

// Run `xprop` to see the class and name of an X client.
const PROFILE_FLOAT_RULES: &[Match] = &[
    Match::wm_class("confirmreset"), // gitk
    Match::wm_class("makebranch"),   // gitk
    Match::wm_class("maketag"),      // gitk
    Match::wm_class("ssh-askpass"),
    Match::title("branchdialog"), // gitk
    Match::title("pinentry"),     // GPG key password entry
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatRules {
    rules: Vec<Match>,
}

impl FloatRules {
    pub fn new(rules: Vec<Match>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Match] {
        &self.rules
    }

    pub fn should_float(&self, props: &WindowProps) -> bool {
        self.rules.iter().any(|rule| rule.matches(props))
    }
}

impl Default for FloatRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_FLOAT_RULES
                .iter()
                .chain(PROFILE_FLOAT_RULES)
                .copied()
                .collect(),
        )
    }
}
