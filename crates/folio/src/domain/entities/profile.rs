//! ProfileContext - Background text injected into every prompt
//!
//! Built once at startup and shared read-only between requests.

use std::borrow::Cow;

/// Profile of the site owner, used to ground every answer.
// Phone omitted: source number is malformed.
pub const PROFILE_CONTEXT: &str = "Name: Akash Swain
Email: aswain414@gmail.com
GitHub: https://github.com/aswain414
LinkedIn: https://www.linkedin.com/in/akash-swain-20645813a/
Location: Originally from Bhubaneswar, Odisha; currently based in Pune, India.

Current Title: Solutions Developer (ER&D Department)
Current Company: Tata Technologies (Client: Tata Motors), Pune
Experience: 5+ years in AI/ML engineering and full-stack development.

Previous Company: Silicon Techlab Pvt. Ltd.
Role: AI/ML Engineer & Full-Stack Developer

Education:
- B.Tech in Computer Science and Engineering, Centurion University of Technology and Management (2016–2020), CGPA: 8.17.
- 12th (Science), CHSE Odisha, 2016.
- 10th, BSE Odisha, 2013.

Skills:
- Programming: Python, PHP, JavaScript
- Frameworks: Django, FastAPI, Flask, Laravel, React.js
- AI/ML: NLP, Generative AI, LangChain, LangGraph, Transformers, Machine Learning, Deep Learning
- Tools: Power BI, Metabase, Streamlit
- Databases & APIs: REST APIs, JSON/XML, SQL
- Other: Automation, data visualization, analytics

Projects:
- AutoQuery AI: Built an AI system that converts natural language questions into optimized database queries using LLMs, helping non-technical users fetch data easily.
- KATS (Knowledge-Aided Ticketing System): Developed a system to detect duplicate issues in support tickets, reducing redundancy and improving resolution speed.
- Handwritten Image to Text: Implemented an OCR-based AI tool to extract accurate text from handwritten notes and scanned images, useful for digitization of records.
- LQOS (Line Quality Optimization System): Designed a monitoring and analytics solution to identify and fix quality issues in production lines, improving efficiency.
- Audit Management Tool: Created an end-to-end digital audit management platform to plan, track, and report audits, reducing paperwork and manual effort.

Achievements:
- Delivered AI-powered solutions for automotive engineering at Tata Motors.
- Built scalable data analysis pipelines and automation workflows.
- Successfully deployed AI/NLP solutions in real-world business environments.

Languages: English, Hindi, Odia
Interests: Coding challenges, WWE

Goal: To design and deliver innovative AI-driven products with Python and Generative AI that solve real-world problems, automate workflows, and create measurable business impact.
";

/// Immutable context block describing one person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileContext {
    text: Cow<'static, str>,
}

impl ProfileContext {
    /// The profile compiled into the binary
    pub fn builtin() -> Self {
        Self {
            text: Cow::Borrowed(PROFILE_CONTEXT),
        }
    }

    /// Create a profile from arbitrary text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for ProfileContext {
    fn default() -> Self {
        Self::builtin()
    }
}
