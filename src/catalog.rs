//! Closed catalogs the generator draws from: model and provider names,
//! generation parameter choices, canned prompt/response text, error
//! archetypes, and the per-model pricing table.

/// Model names the generator chooses between.
pub const MODELS: &[&str] = &[
    "gpt-4",
    "gpt-3.5-turbo",
    "gpt-4-turbo",
    "claude-3",
    "claude-3-haiku",
    "claude-3-sonnet",
    "llama-2-7b",
    "llama-2-13b",
    "llama-2-70b",
    "mistral-7b",
    "mixtral-8x7b",
];

/// Provider names the generator chooses between.
pub const PROVIDERS: &[&str] = &["openai", "anthropic", "together", "replicate", "ollama"];

/// User archetypes recorded in trace metadata.
pub const USER_TYPES: &[&str] = &["developer", "analyst", "researcher", "student", "business"];

/// Deployment environments recorded in metadata and metrics labels.
pub const ENVIRONMENTS: &[&str] = &["development", "staging", "production"];

/// Allowed `max_tokens` request values.
pub const MAX_TOKENS_CHOICES: &[u32] = &[256, 512, 1024, 2048];

/// Canned prompt texts for the `input` field.
pub const PROMPTS: &[&str] = &[
    "Explain the concept of quantum computing in simple terms.",
    "Write a Python function to calculate the Fibonacci sequence.",
    "What are the benefits of using Kubernetes for container orchestration?",
    "Summarize the key points from this research paper about machine learning.",
    "Generate a creative story about a robot learning to paint.",
    "Help me debug this SQL query that's running slowly.",
    "Translate this text from English to Spanish.",
    "What are the best practices for API design?",
    "Create a marketing plan for a new SaaS product.",
    "Explain the differences between supervised and unsupervised learning.",
];

/// Canned response texts for the `output` field.
pub const RESPONSES: &[&str] = &[
    "Here's a comprehensive explanation of the concept...",
    "I'll help you create that function. Here's the implementation...",
    "Kubernetes offers several key benefits for container orchestration...",
    "Based on the research paper, the main findings are...",
    "Once upon a time, in a small workshop, there lived a robot named Pixel...",
    "Looking at your SQL query, I can see a few optimization opportunities...",
    "Here's the Spanish translation of the provided text...",
    "When designing APIs, it's important to follow these best practices...",
    "Here's a comprehensive marketing plan for your SaaS product...",
    "The main differences between supervised and unsupervised learning are...",
];

/// Per-1K-token pricing for a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelCost {
    /// Cost per 1,000 input tokens, in dollars.
    pub input_per_1k: f64,
    /// Cost per 1,000 output tokens, in dollars.
    pub output_per_1k: f64,
}

/// Fallback pricing applied to any model name the table does not know.
pub const DEFAULT_COST: ModelCost = ModelCost {
    input_per_1k: 0.001,
    output_per_1k: 0.002,
};

/// Looks up per-1K-token pricing for a model.
///
/// Unknown model names fall back to [`DEFAULT_COST`] rather than failing, so
/// generation never blocks on an incomplete pricing table.
pub fn model_cost(model: &str) -> ModelCost {
    let (input_per_1k, output_per_1k) = match model {
        "gpt-4" => (0.03, 0.06), // per 1K tokens
        "gpt-3.5-turbo" => (0.001, 0.002),
        "gpt-4-turbo" => (0.01, 0.03),
        "claude-3" => (0.015, 0.075),
        "claude-3-haiku" => (0.00025, 0.00125),
        "claude-3-sonnet" => (0.003, 0.015),
        "llama-2-7b" | "mistral-7b" => (0.0002, 0.0002),
        "llama-2-13b" => (0.0003, 0.0003),
        "llama-2-70b" => (0.0008, 0.0008),
        "mixtral-8x7b" => (0.0006, 0.0006),
        _ => (DEFAULT_COST.input_per_1k, DEFAULT_COST.output_per_1k),
    };
    ModelCost {
        input_per_1k,
        output_per_1k,
    }
}

/// A failure shape the error generator can produce.
#[derive(Debug, Clone, Copy)]
pub struct ErrorArchetype {
    /// Error class name, e.g. `RateLimitError`.
    pub kind: &'static str,
    /// Human-readable message for the class.
    pub message: &'static str,
    /// Whether the failure carries a `retry_after` hint.
    pub retryable: bool,
}

/// The five failure shapes observed from upstream providers.
pub const ERROR_ARCHETYPES: &[ErrorArchetype] = &[
    ErrorArchetype {
        kind: "RateLimitError",
        message: "API rate limit exceeded",
        retryable: true,
    },
    ErrorArchetype {
        kind: "InvalidRequestError",
        message: "Invalid parameter: temperature must be between 0 and 2",
        retryable: false,
    },
    ErrorArchetype {
        kind: "AuthenticationError",
        message: "Invalid API key",
        retryable: false,
    },
    ErrorArchetype {
        kind: "ServiceUnavailableError",
        message: "Service temporarily unavailable",
        retryable: false,
    },
    ErrorArchetype {
        kind: "TimeoutError",
        message: "Request timed out after 30 seconds",
        retryable: false,
    },
];
