//! Locale selection and the static UI string table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Portuguese is the default locale. The active choice is persisted under the
//! `language` localStorage key; without one, the browser language decides.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// localStorage key holding the persisted locale tag.
pub const STORAGE_KEY: &str = "language";

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    /// Resolve a BCP 47 tag by its base language (`pt-BR` -> `Pt`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let base = tag.split(['-', '_']).next().unwrap_or_default();
        match base.trim().to_ascii_lowercase().as_str() {
            "pt" => Some(Self::Pt),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Look up a UI string.
    pub fn text(self, key: Text) -> &'static str {
        match self {
            Self::Pt => pt(key),
            Self::En => en(key),
        }
    }
}

/// Pick the locale from a stored tag, then the browser tag, then the default.
pub fn resolve(stored: Option<&str>, browser: Option<&str>) -> Locale {
    stored
        .and_then(Locale::from_tag)
        .or_else(|| browser.and_then(Locale::from_tag))
        .unwrap_or_default()
}

/// Read the persisted or browser locale.
pub fn read_preference() -> Locale {
    let stored = super::storage::load(STORAGE_KEY);
    resolve(stored.as_deref(), browser_language().as_deref())
}

/// Persist `locale` and update the document language.
pub fn save_preference(locale: Locale) {
    super::storage::save(STORAGE_KEY, locale.tag());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", locale.tag());
        }
    }
}

fn browser_language() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Keys for every user-visible string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    HeroTitle,
    HeroSubtitle,
    EmailLabel,
    EmailPlaceholder,
    PasswordLabel,
    PasswordPlaceholder,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    LoginTitle,
    LoginSubtitle,
    LoginCreateAccount,
    LoginSubmit,
    LoginSubmitting,
    LoginInvalidCredentials,
    LoginFailed,
    SignupTitle,
    SignupSubtitle,
    SignupLoginLink,
    SignupPasswordPlaceholder,
    SignupSubmit,
    SignupSubmitting,
    SignupFailed,
    Checking,
    DashboardTitle,
    DashboardLoading,
    DashboardFailed,
    Retry,
    Logout,
    ChartTitle,
    ChartSeries,
    TableTitle,
    ColumnId,
    ColumnName,
    ColumnStatus,
    ColumnValue,
    ThemeToLight,
    ThemeToDark,
}

fn pt(key: Text) -> &'static str {
    match key {
        Text::HeroTitle => "Painel de Vendas",
        Text::HeroSubtitle => "Acompanhe seus resultados em tempo real",
        Text::EmailLabel => "Email",
        Text::EmailPlaceholder => "seu@email.com",
        Text::PasswordLabel => "Senha",
        Text::PasswordPlaceholder => "Sua senha",
        Text::EmailRequired => "Email e obrigatorio",
        Text::EmailInvalid => "Email invalido",
        Text::PasswordRequired => "Senha e obrigatoria",
        Text::PasswordTooShort => "Senha deve ter no minimo 6 caracteres",
        Text::LoginTitle => "Entrar na sua conta",
        Text::LoginSubtitle => "Ou",
        Text::LoginCreateAccount => "crie uma nova conta",
        Text::LoginSubmit => "Entrar",
        Text::LoginSubmitting => "Entrando...",
        Text::LoginInvalidCredentials => "Email ou senha invalidos",
        Text::LoginFailed => "Erro ao fazer login. Tente novamente.",
        Text::SignupTitle => "Criar nova conta",
        Text::SignupSubtitle => "Ou",
        Text::SignupLoginLink => "faca login se ja tem uma conta",
        Text::SignupPasswordPlaceholder => "Minimo 6 caracteres",
        Text::SignupSubmit => "Criar conta",
        Text::SignupSubmitting => "Criando conta...",
        Text::SignupFailed => "Erro ao criar conta. Tente novamente.",
        Text::Checking => "Carregando...",
        Text::DashboardTitle => "Dashboard",
        Text::DashboardLoading => "Carregando dados...",
        Text::DashboardFailed => "Erro ao carregar dados do dashboard",
        Text::Retry => "Tentar novamente",
        Text::Logout => "Sair",
        Text::ChartTitle => "Evolucao de Vendas",
        Text::ChartSeries => "Valor (R$)",
        Text::TableTitle => "Produtos",
        Text::ColumnId => "ID",
        Text::ColumnName => "Nome",
        Text::ColumnStatus => "Status",
        Text::ColumnValue => "Valor",
        Text::ThemeToLight => "Usar tema claro",
        Text::ThemeToDark => "Usar tema escuro",
    }
}

fn en(key: Text) -> &'static str {
    match key {
        Text::HeroTitle => "Sales Dashboard",
        Text::HeroSubtitle => "Track your results in real time",
        Text::EmailLabel => "Email",
        Text::EmailPlaceholder => "you@email.com",
        Text::PasswordLabel => "Password",
        Text::PasswordPlaceholder => "Your password",
        Text::EmailRequired => "Email is required",
        Text::EmailInvalid => "Invalid email",
        Text::PasswordRequired => "Password is required",
        Text::PasswordTooShort => "Password must be at least 6 characters",
        Text::LoginTitle => "Sign in to your account",
        Text::LoginSubtitle => "Or",
        Text::LoginCreateAccount => "create a new account",
        Text::LoginSubmit => "Sign in",
        Text::LoginSubmitting => "Signing in...",
        Text::LoginInvalidCredentials => "Invalid email or password",
        Text::LoginFailed => "Login failed. Please try again.",
        Text::SignupTitle => "Create a new account",
        Text::SignupSubtitle => "Or",
        Text::SignupLoginLink => "sign in if you already have an account",
        Text::SignupPasswordPlaceholder => "At least 6 characters",
        Text::SignupSubmit => "Create account",
        Text::SignupSubmitting => "Creating account...",
        Text::SignupFailed => "Could not create account. Please try again.",
        Text::Checking => "Loading...",
        Text::DashboardTitle => "Dashboard",
        Text::DashboardLoading => "Loading data...",
        Text::DashboardFailed => "Failed to load dashboard data",
        Text::Retry => "Try again",
        Text::Logout => "Sign out",
        Text::ChartTitle => "Sales Trend",
        Text::ChartSeries => "Value (R$)",
        Text::TableTitle => "Products",
        Text::ColumnId => "ID",
        Text::ColumnName => "Name",
        Text::ColumnStatus => "Status",
        Text::ColumnValue => "Value",
        Text::ThemeToLight => "Switch to light theme",
        Text::ThemeToDark => "Switch to dark theme",
    }
}
