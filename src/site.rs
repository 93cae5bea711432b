//! Compiled-in portfolio content and the stateless functions that render it.
//!
//! The sections are plain ordered records passed into render functions that
//! interpolate static HTML. There is deliberately no templating engine.

pub const OWNER_NAME: &str = "Danish Mehmood";
pub const OWNER_TITLE: &str = "Fullstack Developer";
pub const OWNER_EMAIL: &str = "danishm7012@gmail.com";
pub const OWNER_PHONE: &str = "+92 323 1447956";
pub const OWNER_LOCATION: &str = "Pakistan";
pub const OWNER_LINKEDIN: &str = "https://www.linkedin.com/in/danish-mehmood-6b41401b3/";

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and Stripe \
            integration. Features include user authentication, product management, and \
            secure payments.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Express"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, \
            drag-and-drop functionality, and team collaboration features.",
        technologies: &["Next.js", "TypeScript", "Prisma", "PostgreSQL", "Socket.io"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Weather Dashboard",
        description: "A responsive weather dashboard with location-based forecasts, \
            interactive maps, and detailed weather analytics using multiple APIs.",
        technologies: &["React", "Chart.js", "OpenWeather API", "Tailwind CSS"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Social Media Dashboard",
        description: "A comprehensive social media analytics dashboard with data \
            visualization, user engagement metrics, and automated reporting.",
        technologies: &["Vue.js", "D3.js", "Python", "FastAPI", "Redis"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Real Estate Platform",
        description: "A modern real estate platform with property listings, virtual tours, \
            mortgage calculator, and advanced search filters.",
        technologies: &["Next.js", "Mapbox", "Prisma", "Cloudinary", "Stripe"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Learning Management System",
        description: "An educational platform with course creation, video streaming, \
            progress tracking, and interactive quizzes for online learning.",
        technologies: &["React", "Node.js", "MongoDB", "AWS S3", "JWT"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Advanced AI & LLMs",
        skills: &[
            "GPT-4o/Claude 3.5",
            "LangChain/LlamaIndex",
            "Multi-Agent Systems",
            "RAG Architecture",
            "Fine-tuning/PEFT",
            "Vector Databases",
        ],
    },
    SkillGroup {
        title: "ML & Computer Vision",
        skills: &[
            "PyTorch/TensorFlow",
            "YOLO v8+/Detection",
            "Transformer Models",
            "Edge AI/TensorRT",
            "MLOps/MLflow",
            "Distributed Training",
        ],
    },
    SkillGroup {
        title: "Enterprise Architecture",
        skills: &[
            "Kubernetes/Docker",
            "Microservices/gRPC",
            "AWS/GCP/Azure",
            "Serverless/Edge",
            "Real-time Systems",
            "Performance Optimization",
        ],
    },
    SkillGroup {
        title: "Modern Development",
        skills: &[
            "Next.js 15/React 19",
            "TypeScript/Rust",
            "WebGPU/WASM",
            "Streaming/WebRTC",
            "Database Design",
            "Security/Auth",
        ],
    },
];

pub fn render_home() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{name} - {title}</title>
</head>
<body>
{hero}
{about}
{projects}
{skills}
{contact}
<footer><p>&copy; {name}</p></footer>
</body>
</html>"#,
        name = OWNER_NAME,
        title = OWNER_TITLE,
        hero = render_hero(),
        about = render_about(),
        projects = render_projects(PROJECTS),
        skills = render_skills(SKILL_GROUPS),
        contact = render_contact(),
    )
}

fn render_hero() -> String {
    format!(
        r#"<section id="hero">
<h1>Hi, I'm {name}</h1>
<p>Senior AI Engineer &amp; Full-Stack Architect with 5+ years building production-grade applications.</p>
</section>"#,
        name = OWNER_NAME,
    )
}

fn render_about() -> String {
    "<section id=\"about\">\n<h2>About Me</h2>\n\
     <p>Senior AI Engineer and Full-Stack Architect with 5+ years of professional \
     experience building production-grade applications.</p>\n</section>"
        .to_string()
}

fn render_projects(projects: &[Project]) -> String {
    let cards: String = projects
        .iter()
        .map(|project| {
            let technologies: String = project
                .technologies
                .iter()
                .map(|tech| format!("<span>{}</span>", tech))
                .collect();
            format!(
                r#"<article>
<h3>{title}</h3>
<p>{description}</p>
<div>{technologies}</div>
<p><a href="{github_url}">Code</a> <a href="{live_url}">Live Demo</a></p>
</article>"#,
                title = project.title,
                description = project.description,
                technologies = technologies,
                github_url = project.github_url,
                live_url = project.live_url,
            )
        })
        .collect();
    format!(
        "<section id=\"projects\">\n<h2>My Projects</h2>\n{}\n</section>",
        cards
    )
}

fn render_skills(groups: &[SkillGroup]) -> String {
    let lists: String = groups
        .iter()
        .map(|group| {
            let items: String = group
                .skills
                .iter()
                .map(|skill| format!("<li>{}</li>", skill))
                .collect();
            format!("<div><h3>{}</h3><ul>{}</ul></div>", group.title, items)
        })
        .collect();
    format!(
        "<section id=\"skills\">\n<h2>Skills &amp; Expertise</h2>\n{}\n</section>",
        lists
    )
}

/// Contact section: owner details plus the submission form. The inline script
/// validates the four fields against the same constraints the server enforces,
/// keeps at most one request in flight, clears the form only on success and
/// leaves the values intact on failure.
fn render_contact() -> String {
    format!(
        r#"<section id="contact">
<h2>Get In Touch</h2>
<ul>
<li>Email: <a href="mailto:{email}">{email}</a></li>
<li>Phone: <a href="tel:{phone_href}">{phone}</a></li>
<li>Location: {location}</li>
<li>LinkedIn: <a href="{linkedin}">{name}</a></li>
</ul>
<form id="contact-form" novalidate>
<label for="name">Name *</label>
<input id="name" name="name" type="text" placeholder="Your name">
<p class="field-error" id="name-error"></p>
<label for="email">Email *</label>
<input id="email" name="email" type="email" placeholder="your.email@example.com">
<p class="field-error" id="email-error"></p>
<label for="subject">Subject *</label>
<input id="subject" name="subject" type="text" placeholder="What's this about?">
<p class="field-error" id="subject-error"></p>
<label for="message">Message *</label>
<textarea id="message" name="message" rows="6" placeholder="Tell me about your project..."></textarea>
<p class="field-error" id="message-error"></p>
<p id="form-status"></p>
<button type="submit" id="submit-button">Send Message</button>
</form>
<script>
(function () {{
  var form = document.getElementById('contact-form');
  var button = document.getElementById('submit-button');
  var status = document.getElementById('form-status');

  var rules = [
    ['name', function (v) {{ return v.length >= 2; }}, 'Name must be at least 2 characters'],
    ['email', function (v) {{ return /^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(v); }}, 'Please enter a valid email address'],
    ['subject', function (v) {{ return v.length >= 5; }}, 'Subject must be at least 5 characters'],
    ['message', function (v) {{ return v.length >= 10; }}, 'Message must be at least 10 characters']
  ];

  form.addEventListener('submit', function (event) {{
    event.preventDefault();
    status.textContent = '';

    var values = {{}};
    var valid = true;
    rules.forEach(function (rule) {{
      var field = document.getElementById(rule[0]);
      var error = document.getElementById(rule[0] + '-error');
      values[rule[0]] = field.value;
      if (!rule[1](field.value)) {{
        error.textContent = rule[2];
        valid = false;
      }} else {{
        error.textContent = '';
      }}
    }});
    if (!valid) {{
      return;
    }}

    button.disabled = true;
    button.textContent = 'Sending...';
    fetch('/api/contact', {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: JSON.stringify(values)
    }})
      .then(function (response) {{
        if (response.ok) {{
          form.reset();
          status.textContent = 'Thank you! Your message has been sent successfully.';
        }} else {{
          status.textContent = 'Something went wrong. Please try again later.';
        }}
      }})
      .catch(function () {{
        status.textContent = 'Something went wrong. Please try again later.';
      }})
      .finally(function () {{
        button.disabled = false;
        button.textContent = 'Send Message';
      }});
  }});
}})();
</script>
</section>"#,
        name = OWNER_NAME,
        email = OWNER_EMAIL,
        phone = OWNER_PHONE,
        phone_href = "+923231447956",
        location = OWNER_LOCATION,
        linkedin = OWNER_LINKEDIN,
    )
}
