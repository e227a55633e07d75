/// DebugAI — centralized constants.
/// Model names, endpoints, generation defaults and fixed UI text live here.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
    pub const GEMINI_API_VERSION: &str = "v1beta";
}

// ─── Generation ───────────────────────────────────────────────────────────────

pub mod generation {
    /// Low randomness keeps answers in a technical register.
    pub const TEMPERATURE: f32 = 0.3;
    pub const TOP_P: f32 = 0.8;
    pub const TOP_K: u32 = 40;
    pub const MAX_OUTPUT_TOKENS: u32 = 1024;
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
    pub const THEME: &str = "hacker";
    pub const DEFAULT_MODEL: &str = super::models::DEFAULT_GEMINI_MODEL;
}

// ─── Limits ───────────────────────────────────────────────────────────────────

pub mod limits {
    /// Number of most recent turns embedded in each prompt.
    pub const HISTORY_WINDOW: usize = 5;
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const CONFIG_DIR: &str = "debugai";
    pub const CONFIG_FILE: &str = "config.toml";
}

// ─── Fixed UI text ────────────────────────────────────────────────────────────

pub mod text {
    pub const ERROR_PREFIX: &str = "Erro ao gerar resposta: ";

    pub const GREETING: &str = "\
💡 Olá! Para começar, digite abaixo o erro ou log que você deseja analisar.

Exemplos de entrada:
- ❌ `Error: Docker daemon not running`
- ❌ `kubectl get pods travando`
- ❌ `Timeout conectando no RDS`

Eu irei analisar e sugerir soluções práticas. 👇";

    pub const INTRO: &str = "\
DebugAI é um assistente de diagnóstico para erros e logs em ambientes DevOps.
Ele utiliza IA Generativa (Gemini API) para analisar problemas técnicos e sugerir soluções práticas.";

    pub const THINKING: &str = "🤔 Analisando...";
}

// ─── Useful links ─────────────────────────────────────────────────────────────

pub mod links {
    pub const DOC_LINKS: &[(&str, &str)] = &[
        ("🐳 Docker Docs", "https://docs.docker.com/"),
        ("☸️ Kubernetes Docs", "https://kubernetes.io/docs/"),
        ("📊 Prometheus Docs", "https://prometheus.io/docs/"),
        ("☁️ AWS CLI Docs", "https://docs.aws.amazon.com/cli/"),
    ];
}
