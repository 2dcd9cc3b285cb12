//! Topic→subtopic and topic→resource facts for learning roadmaps and interviews.

use super::{dedup_preserving_order, FactStore};

const SUBTOPIC: &str = "subtopic";
const RESOURCE: &str = "resource";

pub const DSA: &str = "data structures and algorithms";
pub const FRONTEND: &str = "frontend development";
pub const BACKEND: &str = "backend development";
pub const MACHINE_LEARNING: &str = "machine learning";
pub const DATABASES: &str = "databases";
pub const SYSTEM_DESIGN: &str = "system design";
pub const CLOUD: &str = "cloud fundamentals";

/// Relation name for a level-specific variant, e.g. `subtopic_beginner`.
fn leveled(relation: &str, level: &str) -> String {
    format!("{relation}_{}", level.trim().to_lowercase())
}

/// Curriculum facts for the seeded topics.
#[derive(Debug, Clone)]
pub struct EducationKnowledge {
    store: FactStore,
}

impl Default for EducationKnowledge {
    fn default() -> Self {
        Self::seeded()
    }
}

impl EducationKnowledge {
    pub fn seeded() -> Self {
        let mut s = FactStore::new();

        s.add_facts(
            SUBTOPIC,
            DSA,
            &[
                "arrays",
                "linked lists",
                "stacks",
                "queues",
                "hash tables",
                "trees",
                "binary search trees",
                "graphs",
                "sorting",
                "searching",
            ],
        );
        s.add_facts(
            "subtopic_beginner",
            DSA,
            &["big-o notation", "recursion", "dynamic programming", "greedy algorithms"],
        );
        s.add_facts(
            "subtopic_intermediate",
            DSA,
            &["graph shortest paths", "minimum spanning tree", "advanced dp", "string algorithms"],
        );
        s.add_facts(
            "subtopic_advanced",
            DSA,
            &["suffix arrays/tries", "network flow", "segment trees", "heavy-light decomposition"],
        );
        s.add_facts(
            RESOURCE,
            DSA,
            &["CLRS book (Introduction to Algorithms)", "LeetCode practice"],
        );
        s.add_facts(
            "resource_beginner",
            DSA,
            &["freeCodeCamp DSA playlist", "Grokking Algorithms (book)"],
        );
        s.add_facts(
            "resource_intermediate",
            DSA,
            &["Algorithms Illuminated (series)", "LeetCode patterns (NeetCode)"],
        );
        s.add_facts(
            "resource_advanced",
            DSA,
            &["Competitive Programmer's Handbook", "CP-Algorithms (e-maxx)"],
        );

        s.add_facts(
            SUBTOPIC,
            FRONTEND,
            &["html", "css", "javascript", "react", "state management", "testing"],
        );
        s.add_fact(RESOURCE, FRONTEND, "MDN Web Docs");
        s.add_fact("resource_beginner", FRONTEND, "Frontend Masters beginner path");
        s.add_facts(
            "subtopic_intermediate",
            FRONTEND,
            &["react hooks", "typescript", "next.js", "routing", "forms", "accessibility"],
        );
        s.add_facts(
            "subtopic_advanced",
            FRONTEND,
            &[
                "performance optimization",
                "server components",
                "ssr/ssg",
                "web vitals",
                "testing-library",
            ],
        );
        s.add_fact("resource_beginner", FRONTEND, "React Docs (beta)");
        s.add_facts(
            "resource_intermediate",
            FRONTEND,
            &["Next.js Documentation", "TypeScript Handbook"],
        );
        s.add_fact("resource_advanced", FRONTEND, "Web.dev performance guides");

        s.add_facts(
            SUBTOPIC,
            BACKEND,
            &[
                "http fundamentals",
                "rest design",
                "authentication",
                "authorization",
                "databases",
                "caching",
                "message queues",
                "logging",
                "testing",
            ],
        );
        s.add_facts(
            "subtopic_beginner",
            BACKEND,
            &["express/django basics", "orm basics", "docker basics", "ci/cd basics"],
        );
        s.add_facts(
            "subtopic_intermediate",
            BACKEND,
            &["microservices", "event-driven", "observability", "rate limiting", "api gateways"],
        );
        s.add_facts(
            "subtopic_advanced",
            BACKEND,
            &["distributed transactions", "sagas", "idempotency", "resilience patterns"],
        );
        s.add_fact("resource_beginner", BACKEND, "Express.js Guide / Django Docs");
        s.add_fact("resource_intermediate", BACKEND, "12-Factor App");
        s.add_fact("resource_advanced", BACKEND, "Microservices.io patterns");

        s.add_facts(
            "subtopic_beginner",
            MACHINE_LEARNING,
            &[
                "linear regression",
                "logistic regression",
                "overfitting",
                "cross-validation",
                "feature scaling",
            ],
        );
        s.add_facts(
            "subtopic_intermediate",
            MACHINE_LEARNING,
            &[
                "tree-based models",
                "svm",
                "unsupervised learning",
                "feature engineering",
                "model evaluation",
            ],
        );
        s.add_facts(
            "subtopic_advanced",
            MACHINE_LEARNING,
            &["neural networks", "cnn/rnn", "transfer learning", "deployment (mlops)"],
        );
        s.add_fact("resource_beginner", MACHINE_LEARNING, "Andrew Ng ML (Coursera)");
        s.add_fact(
            "resource_intermediate",
            MACHINE_LEARNING,
            "Hands-On ML with Scikit-Learn & TensorFlow",
        );
        s.add_fact("resource_advanced", MACHINE_LEARNING, "FastAI Practical Deep Learning");

        s.add_facts(
            "subtopic_beginner",
            DATABASES,
            &["relational basics", "sql", "indexes", "transactions", "normalization"],
        );
        s.add_facts(
            "subtopic_intermediate",
            DATABASES,
            &["query optimization", "replication", "sharding", "nosql (document/key-value)"],
        );
        s.add_facts(
            "subtopic_advanced",
            DATABASES,
            &["olap vs oltp", "time-series", "graph databases", "tuning & observability"],
        );
        s.add_fact("resource_beginner", DATABASES, "SQLZoo / W3Schools SQL");
        s.add_fact("resource_intermediate", DATABASES, "Use The Index, Luke");
        s.add_fact("resource_advanced", DATABASES, "Designing Data-Intensive Applications");

        s.add_facts(
            SUBTOPIC,
            SYSTEM_DESIGN,
            &[
                "scalability basics",
                "load balancing",
                "caching strategies",
                "cdn",
                "queues",
                "databases selection",
                "consistency",
                "cap theorem",
            ],
        );
        s.add_fact("resource_beginner", SYSTEM_DESIGN, "System Design Primer (GitHub)");
        s.add_fact(
            "resource_intermediate",
            SYSTEM_DESIGN,
            "Grokking the System Design Interview",
        );
        s.add_fact("resource_advanced", SYSTEM_DESIGN, "High Scalability blog");

        s.add_facts(
            "subtopic_beginner",
            CLOUD,
            &[
                "iam",
                "compute (ec2)",
                "storage (s3)",
                "serverless (lambda)",
                "networking (vpc)",
            ],
        );
        s.add_facts(
            "subtopic_intermediate",
            CLOUD,
            &["infrastructure as code", "containers (ecs/eks)", "monitoring/logging"],
        );
        s.add_facts(
            "subtopic_advanced",
            CLOUD,
            &["multi-account strategy", "cost optimization", "resilience & dr"],
        );
        s.add_fact("resource_beginner", CLOUD, "AWS Skill Builder - Cloud Practitioner");
        s.add_fact(
            "resource_intermediate",
            CLOUD,
            "IaC with Terraform (HashiCorp Learn)",
        );
        s.add_fact("resource_advanced", CLOUD, "AWS Well-Architected Framework");

        Self { store: s }
    }

    /// Generic subtopics followed by the level-specific ones, without duplicates.
    pub fn subtopics_for(&self, topic: &str, level: &str) -> Vec<String> {
        self.collect(SUBTOPIC, topic, level)
    }

    /// Generic resources followed by the level-specific ones, without duplicates.
    pub fn resources_for(&self, topic: &str, level: &str) -> Vec<String> {
        self.collect(RESOURCE, topic, level)
    }

    /// Maps free text to a seeded topic: exact name first, then the first
    /// topic mentioned anywhere in the text.
    pub fn resolve_topic(&self, text: &str) -> Option<&str> {
        let text = text.trim().to_lowercase();
        let topics = self.topics();
        topics
            .iter()
            .find(|t| **t == text)
            .or_else(|| topics.iter().find(|t| text.contains(**t)))
            .copied()
    }

    fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for relation in [SUBTOPIC, "subtopic_beginner", "subtopic_intermediate", "subtopic_advanced"] {
            for subject in self.store.subjects(relation) {
                if !topics.contains(&subject) {
                    topics.push(subject);
                }
            }
        }
        topics
    }

    fn collect(&self, relation: &str, topic: &str, level: &str) -> Vec<String> {
        let mut items = self.store.query(relation, topic);
        items.extend(self.store.query(&leveled(relation, level), topic));
        dedup_preserving_order(items)
    }
}
