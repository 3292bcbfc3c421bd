// Prompt templates for resume screening.
// Placeholders: {job_description}, {resume}, {format_instructions}

/// Template for the compact `ScreeningResult` (0–1 score).
pub const SCREENING_PROMPT_TEMPLATE: &str = "You are an expert HR assistant specializing in resume screening.

Evaluate how well the resume below matches the job description. Base every
judgement on what the resume actually states; do not assume skills it does
not mention.

Job Description:
---
{job_description}
---

Resume:
---
{resume}
---

{format_instructions}";

/// Template for the frontend's `DetailedScreeningResult` (0–100 score).
pub const DETAILED_SCREENING_PROMPT_TEMPLATE: &str = "You are an expert HR assistant specializing in resume screening.

Compare the resume below with the job description. List the required and
preferred skills the candidate has and the ones they are missing, assess
their experience and qualifications against the role, and summarize the fit
for a hiring manager.

Job Description:
---
{job_description}
---

Resume:
---
{resume}
---

{format_instructions}";
