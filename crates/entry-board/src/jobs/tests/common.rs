use crate::jobs::{JobPosting, PostingId};

pub(super) fn posting(id: &str, title: &str, company: &str, location: &str) -> JobPosting {
    JobPosting {
        id: PostingId::from(id),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        description: String::new(),
        skills: Vec::new(),
        benefits: Vec::new(),
        salary: "$50,000".to_string(),
        deadline: "2025-12-01".to_string(),
        remote: false,
        tags: Vec::new(),
    }
}

pub(super) fn with_skills(mut posting: JobPosting, skills: &[&str]) -> JobPosting {
    posting.skills = skills.iter().map(|skill| skill.to_string()).collect();
    posting
}

pub(super) fn with_salary(mut posting: JobPosting, salary: &str) -> JobPosting {
    posting.salary = salary.to_string();
    posting
}

pub(super) fn remote(mut posting: JobPosting) -> JobPosting {
    posting.remote = true;
    posting
}

pub(super) fn catalog() -> Vec<JobPosting> {
    let mut support = posting("1", "Support Technician", "Acme Tech", "Austin, TX");
    support.description = "Help customers troubleshoot laptops.".to_string();

    vec![
        with_skills(support, &["Customer Service", "Windows"]),
        remote(with_skills(
            with_salary(
                posting("2", "Junior Data Analyst", "Numbers Inc", "Remote"),
                "$62,000 - $70,000",
            ),
            &["Python", "SQL"],
        )),
        with_skills(
            with_salary(
                posting("3", "Office Assistant", "TechStart", "Denver, CO"),
                "$38,500",
            ),
            &["Excel"],
        ),
        remote(with_salary(
            posting("4", "Marketing Coordinator", "Brightline", "Remote"),
            "Competitive",
        )),
        with_skills(
            with_salary(
                posting("5", "Junior Developer", "Acme Tech", "Austin, TX"),
                "$85,000",
            ),
            &["python", "Git"],
        ),
    ]
}

pub(super) fn ids(postings: &[&JobPosting]) -> Vec<String> {
    postings.iter().map(|posting| posting.id.0.clone()).collect()
}
