/// Static page content. Everything here is fixed at compile time; components
/// only ever read from these tables.

pub struct Skill {
    pub name: &'static str,
    /// SVG path data for the 24x24 skill glyph.
    pub icon_path: &'static str,
}

pub const SKILLS: [Skill; 16] = [
    Skill {
        name: "Manual Testing",
        icon_path: "M9 11H15M9 15H15M17 21H7C5.89543 21 5 20.1046 5 19V5C5 3.89543 5.89543 3 7 3H12.5858C12.851 3 13.1054 3.10536 13.2929 3.29289L18.7071 8.70711C18.8946 8.89464 19 9.149 19 9.41421V19C19 20.1046 18.1046 21 17 21Z",
    },
    Skill {
        name: "Automation Testing",
        icon_path: "M12 2L13.09 8.26L20 9L13.09 9.74L12 16L10.91 9.74L4 9L10.91 8.26L12 2Z",
    },
    Skill {
        name: "Selenium WebDriver",
        icon_path: "M12 2C13.1 2 14 2.9 14 4C14 5.1 13.1 6 12 6C10.9 6 10 5.1 10 4C10 2.9 10.9 2 12 2ZM21 9V7L15 3.5C14.5 3.2 14 3.2 13.5 3.5L9.5 5.5C9 5.8 8.5 6.2 8.5 6.8V8L3 11V13L8.5 9.5V19C8.5 19.8 9.2 20.5 10 20.5S11.5 19.8 11.5 19V14L13.5 15V19C13.5 19.8 14.2 20.5 15 20.5S16.5 19.8 16.5 19V13L21 9Z",
    },
    Skill {
        name: "Java",
        icon_path: "M8.851 18.56s-.917.534.653.714c1.902.218 2.874.187 4.969-.211 0 0 .552.346 1.321.646-4.699 2.013-10.633-.118-6.943-1.149M8.276 15.933s-1.028.761.542.924c2.032.209 3.636.227 6.413-.308 0 0 .384.389.987.602-5.679 1.661-12.007.13-7.942-1.218",
    },
    Skill {
        name: "Bug Reporting",
        icon_path: "M12 7C12 5.89543 11.1046 5 10 5C8.89543 5 8 5.89543 8 7V11C8 12.1046 8.89543 13 10 13C11.1046 13 12 12.1046 12 11V7Z",
    },
    Skill {
        name: "Test Case Creation",
        icon_path: "M9 5H7C5.89543 5 5 5.89543 5 7V19C5 20.1046 5.89543 21 7 21H17C18.1046 21 19 20.1046 19 19V7C19 5.89543 18.1046 5 17 5H15",
    },
    Skill {
        name: "Regression Testing",
        icon_path: "M4 12H20M20 12L16 8M20 12L16 16",
    },
    Skill {
        name: "API Testing",
        icon_path: "M13 2L3 14H12L11 22L21 10H12L13 2Z",
    },
    Skill {
        name: "Postman",
        icon_path: "M13.527.099C6.955-.744.942 3.9.099 10.473c-.843 6.572 3.8 12.584 10.373 13.428 6.573.843 12.587-3.801 13.428-10.374C24.744 6.955 20.101.943 13.527.099zm2.471 7.485a.855.855 0 0 0-.593.25l-4.453 4.453-.307-.307-.643-.643c4.389-4.376 5.18-4.418 5.996-3.753zm-4.863 4.861l4.44-4.44a.62.62 0 1 1 .847.903l-4.699 4.125-.588-.588zm.33.694l-1.1.238a.06.06 0 0 1-.067-.032.06.06 0 0 1 .01-.073l.645-.645.512.512zm-2.803-.459l1.172-1.172.879.878-1.979.426a.074.074 0 0 1-.085-.039.072.072 0 0 1 .013-.093zm-3.646 6.058a.076.076 0 0 1-.069-.083.077.077 0 0 1 .022-.046h.002l.946-.946 1.222 1.222-2.123-.147zm2.425-1.256a.228.228 0 0 0-.117.256l.203.865a.125.125 0 0 0 .211.073l.19-.190-.487-.487v-.517zm1.324.238l1.555 1.555a7.028 7.028 0 0 0 2.97-2.611l-1.777-1.777a.7.7 0 0 0-.998.017l-.1.1-.65.65v2.066z",
    },
    Skill {
        name: "Jira",
        icon_path: "M11.571 11.513H0a5.218 5.218 0 0 0 5.232 5.215h2.13v2.057A5.215 5.215 0 0 0 12.575 24V12.518a1.005 1.005 0 0 0-1.005-1.005zm5.723-5.756H5.736a5.215 5.215 0 0 0 5.215 5.214h2.129V13.03A5.218 5.218 0 0 0 18.3 18.245V6.763a1.006 1.006 0 0 0-1.005-1.006zM23.013.592H11.455a5.215 5.215 0 0 0 5.215 5.214h2.129v2.058a5.218 5.218 0 0 0 5.218 5.215V1.598A1.006 1.006 0 0 0 23.013.592z",
    },
    Skill {
        name: "JavaScript",
        icon_path: "M0 0h24v24H0V0zm22.034 18.276c-.175-1.095-.888-2.015-3.003-2.873-.736-.345-1.554-.585-1.797-1.14-.091-.33-.105-.51-.046-.705.15-.646.915-.84 1.515-.66.39.12.75.42.976.9 1.034-.676 1.034-.676 1.755-1.125-.27-.42-.404-.601-.586-.78-.63-.705-1.469-1.065-2.834-1.034l-.705.089c-.676.165-1.32.525-1.71 1.005-1.14 1.291-.811 3.541.569 4.471 1.365 1.02 3.361 1.244 3.616 2.205.24 1.17-.87 1.545-1.966 1.41-.811-.18-1.26-.586-1.755-1.336l-1.83 1.051c.21.48.45.689.81 1.109 1.74 1.756 6.09 1.666 6.871-1.004.029-.09.24-.705.074-1.65l.046.067zm-8.983-7.245h-2.248c0 1.938-.009 3.864-.009 5.805 0 1.232.063 2.363-.138 2.711-.33.689-1.18.601-1.566.48-.396-.196-.597-.466-.83-.855-.063-.105-.11-.196-.127-.196l-1.825 1.125c.305.63.75 1.172 1.324 1.517.855.51 2.004.675 3.207.405.783-.226 1.458-.691 1.811-1.411.51-.93.402-2.07.397-3.346.012-2.054 0-4.109 0-6.179l.004-.056z",
    },
    Skill {
        name: "HTML/CSS",
        icon_path: "M2 3L3.5 20.5L12 22L20.5 20.5L22 3H2Z",
    },
    Skill {
        name: "Docker",
        icon_path: "M13.983 11.078h2.119a.186.186 0 0 0 .186-.185V9.006a.186.186 0 0 0-.186-.186h-2.119a.185.185 0 0 0-.185.185v1.888c0 .102.083.185.185.185m-2.954-5.43h2.118a.186.186 0 0 0 .186-.186V3.574a.186.186 0 0 0-.186-.185h-2.118a.185.185 0 0 0-.185.185v1.888c0 .102.082.185.185.185m0 2.716h2.118a.187.187 0 0 0 .186-.186V6.29a.186.186 0 0 0-.186-.185h-2.118a.185.185 0 0 0-.185.185v1.888c0 .102.082.185.185.186m-2.93 0h2.12a.186.186 0 0 0 .184-.186V6.29a.185.185 0 0 0-.185-.185H8.1a.185.185 0 0 0-.185.185v1.888c0 .102.083.185.185.186m-2.964 0h2.119a.186.186 0 0 0 .185-.186V6.29a.185.185 0 0 0-.185-.185H5.136a.186.186 0 0 0-.186.185v1.888c0 .102.084.185.186.186m5.893 2.715h2.118a.186.186 0 0 0 .186-.185V9.006a.186.186 0 0 0-.186-.186h-2.118a.185.185 0 0 0-.185.185v1.888c0 .102.082.185.185.185m-2.93 0h2.12a.185.185 0 0 0 .184-.185V9.006a.185.185 0 0 0-.184-.186h-2.12a.185.185 0 0 0-.184.185v1.888c0 .102.083.185.185.185m-2.964 0h2.119a.185.185 0 0 0 .185-.185V9.006a.185.185 0 0 0-.184-.186H5.136a.186.186 0 0 0-.186.186v1.887c0 .102.084.185.186.185m-2.92 0h2.12a.185.185 0 0 0 .184-.185V9.006a.185.185 0 0 0-.184-.186h-2.12a.185.185 0 0 0-.184.185v1.888c0 .102.082.185.185.185m-2.993 0h2.12a.185.185 0 0 0 .184-.185V9.006a.185.185 0 0 0-.184-.186h-2.12a.185.185 0 0 0-.184.185v1.888c0 .102.082.185.185.185",
    },
    Skill {
        name: "Linux",
        icon_path: "M12.504 0c-.155 0-.315.008-.48.021-4.226.333-3.105 4.807-3.17 6.298-.076 1.092-.3 1.953-1.05 3.02-.885 1.051-2.127 2.75-2.716 4.521-.278.832-.41 1.684-.287 2.489a.424.424 0 0 0-.11.135c-.26.268-.45.6-.663.839-.199.199-.485.267-.797.4-.313.136-.658.269-.864.68-.09.189-.136.394-.132.602 0 .199.027.4.055.536.058.399.116.728.04.97-.249.68-.28 1.145-.106 1.484.174.334.535.47.94.601.81.2 1.91.135 2.774.6.926.466 1.866.67 2.616.47.526-.116.97-.464 1.208-.946.587-.003 1.23-.269 2.26-.334.699-.058 1.574.267 2.577.2.025.134.063.198.114.333l.003.003c.391.778 1.113 1.132 1.884 1.071.771-.06 1.592-.536 2.257-1.306.631-.765 1.683-1.084 2.378-1.503.348-.199.629-.469.649-.853.023-.4-.2-.811-.714-1.376v-.097l-.003-.003c-.17-.2-.25-.535-.338-.926-.085-.401-.182-.786-.492-1.046h-.003c-.059-.054-.123-.067-.188-.135a.357.357 0 0 1-.19-.064c.431-1.278.264-2.55-.173-3.694-.533-1.41-1.465-2.638-2.175-3.483-.796-1.005-1.576-1.957-1.56-3.368.026-2.152.236-6.133-3.544-6.139zm.529 3.405h.013c.213 0 .396.062.584.198.19.135.33.332.438.533.105.259.158.459.166.724 0-.02.006-.04.006-.06v.105a.086.086 0 0 1-.004-.021l-.004-.024a1.807 1.807 0 0 1-.15.706.953.953 0 0 1-.213.335.71.71 0 0 1-.088.069c-.014.01-.022.015-.04.021-.04.025-.08.045-.124.06a.879.879 0 0 1-.151.033c-.283.011-.568-.005-.577-.018a17.69 17.69 0 0 1-.265-.55c-.13-.288-.204-.646-.14-.978.055-.334.214-.584.388-.784.146-.16.307-.29.472-.363a.54.54 0 0 1 .295-.046c-.093-.076-.222-.143-.361-.185a.56.56 0 0 0-.421.054.87.87 0 0 0-.308.302.655.655 0 0 0-.17.415c-.048.314.001.631.062.945.058.298.235.469.413.611.136.101.281.154.427.147.87.085 1.758-.064 2.617-.203 1.032-.166 2.033-.318 3.013.19 1.048.54 1.834 1.43 2.185 2.534.363 1.148.315 2.437-.262 3.608-.577 1.17-1.681 2.08-3.065 1.938-.683-.07-1.336-.397-2.04-.427-.699-.03-1.504.282-2.246.334-.743.052-1.522-.105-2.334-.2-.81-.094-1.67-.12-2.4.374-.729.495-1.319 1.44-1.319 2.526 0 1.085.645 2.155 1.432 2.753.787.598 1.843.912 2.924 1.04 1.081.129 2.199.042 3.316-.046 1.116-.088 2.234-.175 3.402-.046 1.168.129 2.388.434 3.692.434 1.303 0 2.697-.305 3.692-1.26.995-.955 1.591-2.659 1.183-4.157-.408-1.498-1.824-2.795-3.416-3.614-1.592-.819-3.362-1.16-5.132-1.024-1.77.135-3.541.646-5.312.646s-3.541-.511-5.312-.646c-1.77-.136-3.54.205-5.132 1.024-1.592.819-3.008 2.116-3.416 3.614-.408 1.498.188 3.202 1.183 4.157.995.955 2.389 1.26 3.692 1.26 1.304 0 2.524-.305 3.692-.434 1.168-.129 2.286-.042 3.402.046 1.117.088 2.235.175 3.316.046 1.081-.128 2.137-.442 2.924-1.04.787-.598 1.432-1.668 1.432-2.753 0-1.085-.59-2.031-1.319-2.526-.73-.494-1.59-.468-2.4-.374-.812.095-1.591.252-2.334.2-.742-.052-1.547-.364-2.246-.334-.704.03-1.357.357-2.04.427-1.384.142-2.488-.768-3.065-1.938-.577-1.17-.625-2.46-.262-3.608.351-1.104 1.137-1.994 2.185-2.534.98-.508 1.981-.356 3.013-.19.859.139 1.747.288 2.617.203.146.007.291-.046.427-.147.178-.142.355-.313.413-.611.061-.314.11-.631.062-.945a.655.655 0 0 0-.17-.415.87.87 0 0 0-.308-.302.56.56 0 0 0-.421-.054c-.139.042-.268.109-.361.185a.54.54 0 0 1 .295.046z",
    },
    Skill {
        name: "TestNG",
        icon_path: "M12 2L22 8.5V15.5L12 22L2 15.5V8.5L12 2Z",
    },
    Skill {
        name: "Maven",
        icon_path: "M12 2L22 8.5V15.5L12 22L2 15.5V8.5L12 2Z",
    },
];
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: [Experience; 1] = [Experience {
    title: "Product Support & QA Intern",
    company: "BlueBrick Technologies",
    period: "Jan 2025 – Apr 2025",
    location: "Remote",
    description: "Specialized in quality assurance and product support for enterprise applications.",
    achievements: &[
        "Provided Level 1 support for Axiom Protect, handling real-time client issues and escalating critical tickets",
        "Conducted comprehensive QA testing for products including Collabrix, Veri5Now, and EngageBot",
        "Collaborated with DevOps to deploy and monitor services using Docker Compose",
        "Worked with Linux systems, server management, and monitoring tools to ensure system reliability",
    ],
}];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Veri5 – Digital Identity Verification System",
        description: "Comprehensive testing of eKYC, OTP authentication, and face verification workflows. Validated API responses for Aadhaar & PAN, and reported UI/UX issues across browsers.",
        image: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=400&h=250&fit=crop&crop=center",
        tech: &["Manual Testing", "API Testing", "Jira", "Cross-browser Testing"],
        link: "https://github.com",
    },
    Project {
        title: "Collabrix – B2B Communication Platform",
        description: "Tested Partner Onboarding, Workflow Automation, and Document Upload modules. Wrote and executed test cases for e-signing, document preview, and user roles.",
        image: "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=400&h=250&fit=crop&crop=center",
        tech: &["Web App Testing", "Jira", "Postman", "User Acceptance Testing"],
        link: "https://github.com",
    },
];

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub key_subjects: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub relevant_coursework: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        institution: "Universal Group of Institutions",
        degree: "Bachelor of Technology - B.Tech, Computer Science",
        period: "2021 – 2024",
        grade: "SGPA: 7.78",
        location: "Punjab, India",
        description: "Comprehensive computer science program focusing on software engineering, data structures, algorithms, and emerging technologies.",
        key_subjects: &[
            "Data Structures & Algorithms",
            "Software Engineering",
            "Database Management Systems",
            "Computer Networks",
            "Operating Systems",
            "Object-Oriented Programming",
            "Web Technologies",
            "Software Testing & QA",
        ],
        achievements: &[
            "Maintained consistent academic performance with SGPA of 7.78",
            "Completed major project on web application development",
            "Participated in technical workshops and coding competitions",
            "Active member of Computer Science Society",
        ],
        relevant_coursework: "Software Testing methodologies, Quality Assurance principles, Database design, Web development frameworks",
    },
    Education {
        institution: "Thapar Polytechnic College",
        degree: "Diploma in Computer Science Engineering",
        period: "2019 – 2021",
        grade: "64%",
        location: "Punjab, India",
        description: "Foundational diploma program covering core computer science concepts, programming languages, and practical application development.",
        key_subjects: &[
            "Programming in C/C++",
            "Java Programming",
            "Database Concepts",
            "Computer Hardware",
            "System Analysis & Design",
            "Web Design & Development",
            "Digital Electronics",
            "Computer Networks Basics",
        ],
        achievements: &[
            "Successfully completed all core technical subjects",
            "Developed strong foundation in programming languages",
            "Completed practical projects in web development",
            "Gained hands-on experience with database systems",
        ],
        relevant_coursework: "Introduction to Software Testing, System Design, Database Management, Web Technologies",
    },
];

pub struct Internship {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub key_learnings: &'static [&'static str],
    pub projects: &'static [&'static str],
}

pub const INTERNSHIPS: [Internship; 2] = [
    Internship {
        title: "MERN Stack Development Intern",
        company: "Excellence Technology",
        period: "Jan 2024 – Jun 2024",
        duration: "6 months",
        location: "Remote",
        kind: "Full-time Internship",
        description: "Comprehensive full-stack development training program focusing on MongoDB, Express.js, React.js, and Node.js technologies.",
        responsibilities: &[
            "Developed full-stack web applications using MERN stack technologies",
            "Built RESTful APIs with Express.js and integrated with MongoDB databases",
            "Created responsive user interfaces using React.js and modern CSS frameworks",
            "Implemented user authentication and authorization systems",
            "Worked with Git for version control and collaborative development",
            "Participated in code reviews and agile development practices",
        ],
        technologies: &[
            "MongoDB",
            "Express.js",
            "React.js",
            "Node.js",
            "JavaScript ES6+",
            "HTML5/CSS3",
            "Bootstrap",
            "Git",
            "Postman",
            "VS Code",
        ],
        key_learnings: &[
            "Full-stack web development lifecycle",
            "Database design and management with MongoDB",
            "Frontend component architecture with React",
            "Backend API development and testing",
            "Version control and team collaboration",
        ],
        projects: &[
            "E-commerce web application with user authentication",
            "Task management system with real-time updates",
            "Blog platform with CRUD operations",
        ],
    },
    Internship {
        title: "Web Development Intern",
        company: "Bar Code Developers",
        period: "Jun 2022 – Aug 2022",
        duration: "1.5 months",
        location: "On-site",
        kind: "Summer Internship",
        description: "Intensive web development training focusing on frontend technologies and responsive design principles.",
        responsibilities: &[
            "Developed responsive websites using HTML5, CSS3, and JavaScript",
            "Created interactive user interfaces with modern design principles",
            "Implemented mobile-first responsive design approaches",
            "Optimized websites for performance and cross-browser compatibility",
            "Collaborated with senior developers on client projects",
            "Learned best practices for web accessibility and SEO",
        ],
        technologies: &[
            "HTML5",
            "CSS3",
            "JavaScript",
            "jQuery",
            "Bootstrap",
            "Sass/SCSS",
            "Figma",
            "Adobe Photoshop",
            "Git",
        ],
        key_learnings: &[
            "Modern web development best practices",
            "Responsive design and mobile-first approach",
            "Cross-browser compatibility testing",
            "UI/UX design principles",
            "Client communication and project management",
        ],
        projects: &[
            "Corporate website with responsive design",
            "Portfolio website for local business",
            "Landing page optimization for conversion",
        ],
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Rahul Sharma",
        role: "Senior QA Lead",
        company: "BlueBrick Technologies",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
        text: "Pardeep demonstrated exceptional attention to detail during his internship. His ability to identify critical bugs and provide comprehensive test reports was outstanding. A reliable team player who always delivers quality work.",
    },
    Testimonial {
        name: "Priya Patel",
        role: "Product Manager",
        company: "Excellence Technology",
        image: "https://images.unsplash.com/photo-1494790108755-2616b612b9e0?w=100&h=100&fit=crop&crop=face",
        text: "Working with Pardeep on the MERN stack project was a pleasure. He quickly grasped complex concepts and implemented features efficiently. His testing approach helped us deliver bug-free applications to our clients.",
    },
    Testimonial {
        name: "Amit Kumar",
        role: "Technical Lead",
        company: "Bar Code Developers",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
        text: "Pardeep's dedication to learning and implementing best practices in web development impressed us all. His responsive designs were pixel-perfect and performed excellently across all devices and browsers.",
    },
    Testimonial {
        name: "Dr. Sanjay Gupta",
        role: "Professor",
        company: "Universal Group of Institutions",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop&crop=face",
        text: "Pardeep was one of our most dedicated students in the Computer Science program. His practical approach to problem-solving and consistent academic performance made him stand out among his peers.",
    },
];

pub const PORTRAIT_URL: &str = "https://media.licdn.com/dms/image/v2/D5603AQEXvT-sbdiUWw/profile-displayphoto-shrink_800_800/B56ZWjuKhoHQAc-/0/1742208543336?e=1758153600&v=beta&t=ubCFzNYEctBlpdeOyfPIxBKaANDICZSW75g2DiF46bE";
pub const GITHUB_URL: &str = "https://github.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/pardeep-sharma-19038720a/";
pub const EMAIL_URL: &str = "mailto:pardeepsharma300600@gmail.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonial_entries_are_complete() {
        for t in &TESTIMONIALS {
            assert!(!t.name.is_empty());
            assert!(!t.role.is_empty());
            assert!(!t.company.is_empty());
            assert!(!t.text.is_empty());
            assert!(t.image.starts_with("https://"));
        }
    }

    #[test]
    fn skill_glyphs_carry_path_data() {
        for s in &SKILLS {
            assert!(s.icon_path.starts_with('M'), "{} has no glyph", s.name);
        }
    }
}
